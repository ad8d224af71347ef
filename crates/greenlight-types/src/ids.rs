//! Stable identifiers for rules and reason codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules
pub const RULE_RELIGIOUS_HALAL: &str = "religious.halal";
pub const RULE_RELIGIOUS_KOSHER: &str = "religious.kosher";
pub const RULE_ALLERGENS_PRESENT: &str = "allergens.present";
pub const RULE_DIETARY_VEGETARIAN: &str = "dietary.vegetarian";
pub const RULE_DIETARY_VEGAN: &str = "dietary.vegan";
pub const RULE_NUTRITION_SODIUM: &str = "nutrition.sodium";
pub const RULE_NUTRITION_SUGAR: &str = "nutrition.sugar";

// Codes: religious.*
pub const CODE_NOT_HALAL: &str = "not_halal";
pub const CODE_NOT_KOSHER: &str = "not_kosher";

// Codes: allergens.present
pub const CODE_CONTAINS_ALLERGEN: &str = "contains_allergen";

// Codes: dietary.*
pub const CODE_NOT_VEGETARIAN: &str = "not_vegetarian";
pub const CODE_NOT_VEGAN: &str = "not_vegan";

// Codes: nutrition.sodium
pub const CODE_SODIUM_HIGH: &str = "sodium_high";
pub const CODE_SODIUM_ELEVATED: &str = "sodium_elevated";
pub const CODE_SODIUM_WITHIN: &str = "sodium_within";

// Codes: nutrition.sugar
pub const CODE_SUGAR_HIGH: &str = "sugar_high";
pub const CODE_SUGAR_ELEVATED: &str = "sugar_elevated";
pub const CODE_SUGAR_WITHIN: &str = "sugar_within";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
