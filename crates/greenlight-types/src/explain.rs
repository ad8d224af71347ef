//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with guidance for diners.

use crate::ids;
use crate::receipt::ReasonKind;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and how it affects the verdict.
    pub description: &'static str,
    /// What a diner (or menu author) can do about it.
    pub remediation: &'static str,
    /// Before/after menu item examples.
    pub examples: ExamplePair,
    /// Codes this entry covers and how each affects the item's level.
    pub outcomes: &'static [Outcome],
}

/// One reason code and the reason kind it is reported with.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub code: &'static str,
    pub kind: ReasonKind,
}

impl Outcome {
    const fn new(code: &'static str, kind: ReasonKind) -> Self {
        Self { code, kind }
    }

    /// Effect on the item's level, in diner terms.
    pub fn effect(&self) -> &'static str {
        match self.kind {
            ReasonKind::Violation => "item rated unsafe",
            ReasonKind::Warning => "item rated at least caution",
            ReasonKind::Confirmation => "no effect on the rating",
        }
    }
}

const HALAL_OUTCOMES: &[Outcome] = &[Outcome::new(ids::CODE_NOT_HALAL, ReasonKind::Violation)];
const KOSHER_OUTCOMES: &[Outcome] = &[Outcome::new(ids::CODE_NOT_KOSHER, ReasonKind::Violation)];
const ALLERGEN_OUTCOMES: &[Outcome] =
    &[Outcome::new(ids::CODE_CONTAINS_ALLERGEN, ReasonKind::Violation)];
const VEGETARIAN_OUTCOMES: &[Outcome] =
    &[Outcome::new(ids::CODE_NOT_VEGETARIAN, ReasonKind::Violation)];
const VEGAN_OUTCOMES: &[Outcome] = &[Outcome::new(ids::CODE_NOT_VEGAN, ReasonKind::Violation)];
const SODIUM_OUTCOMES: &[Outcome] = &[
    Outcome::new(ids::CODE_SODIUM_HIGH, ReasonKind::Violation),
    Outcome::new(ids::CODE_SODIUM_ELEVATED, ReasonKind::Warning),
    Outcome::new(ids::CODE_SODIUM_WITHIN, ReasonKind::Confirmation),
];
const SUGAR_OUTCOMES: &[Outcome] = &[
    Outcome::new(ids::CODE_SUGAR_HIGH, ReasonKind::Violation),
    Outcome::new(ids::CODE_SUGAR_ELEVATED, ReasonKind::Warning),
    Outcome::new(ids::CODE_SUGAR_WITHIN, ReasonKind::Confirmation),
];

/// Before and after menu item examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Item that triggers the rule.
    pub before: &'static str,
    /// Item that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_RELIGIOUS_HALAL => Some(explain_halal()),
        ids::RULE_RELIGIOUS_KOSHER => Some(explain_kosher()),
        ids::RULE_ALLERGENS_PRESENT => Some(explain_allergens()),
        ids::RULE_DIETARY_VEGETARIAN => Some(explain_vegetarian()),
        ids::RULE_DIETARY_VEGAN => Some(explain_vegan()),
        ids::RULE_NUTRITION_SODIUM => Some(explain_sodium()),
        ids::RULE_NUTRITION_SUGAR => Some(explain_sugar()),

        // Codes
        ids::CODE_NOT_HALAL => Some(explain_halal()),
        ids::CODE_NOT_KOSHER => Some(explain_kosher()),
        ids::CODE_CONTAINS_ALLERGEN => Some(explain_allergens()),
        ids::CODE_NOT_VEGETARIAN => Some(explain_vegetarian()),
        ids::CODE_NOT_VEGAN => Some(explain_vegan()),
        ids::CODE_SODIUM_HIGH => Some(explain_sodium_high()),
        ids::CODE_SODIUM_ELEVATED => Some(explain_sodium_elevated()),
        ids::CODE_SODIUM_WITHIN => Some(narrowed(explain_sodium(), &SODIUM_OUTCOMES[2..])),
        ids::CODE_SUGAR_HIGH => Some(explain_sugar_high()),
        ids::CODE_SUGAR_ELEVATED => Some(explain_sugar_elevated()),
        ids::CODE_SUGAR_WITHIN => Some(narrowed(explain_sugar(), &SUGAR_OUTCOMES[2..])),

        _ => None,
    }
}

/// List all known rule IDs, in evaluation order.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_RELIGIOUS_HALAL,
        ids::RULE_RELIGIOUS_KOSHER,
        ids::RULE_ALLERGENS_PRESENT,
        ids::RULE_DIETARY_VEGETARIAN,
        ids::RULE_DIETARY_VEGAN,
        ids::RULE_NUTRITION_SODIUM,
        ids::RULE_NUTRITION_SUGAR,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_NOT_HALAL,
        ids::CODE_NOT_KOSHER,
        ids::CODE_CONTAINS_ALLERGEN,
        ids::CODE_NOT_VEGETARIAN,
        ids::CODE_NOT_VEGAN,
        ids::CODE_SODIUM_HIGH,
        ids::CODE_SODIUM_ELEVATED,
        ids::CODE_SODIUM_WITHIN,
        ids::CODE_SUGAR_HIGH,
        ids::CODE_SUGAR_ELEVATED,
        ids::CODE_SUGAR_WITHIN,
    ]
}

// --- Rule-level explanations ---

fn explain_halal() -> Explanation {
    Explanation {
        title: "Halal",
        description: "\
Applies when the diner (or anyone in the group) keeps halal.

An item flagged `notHalal` contains pork or alcohol. Any such item is a
violation and the item is rated unsafe, whatever its nutrition looks like.",
        remediation: "\
Pick items that are not flagged `notHalal`. Restaurants marked halal on the
menu usually carry several.",
        examples: ExamplePair {
            before: r#"{ "name": "Carbonara", "notHalal": true }"#,
            after: r#"{ "name": "Grilled Chicken", "notHalal": false }"#,
        },
        outcomes: HALAL_OUTCOMES,
    }
}

fn explain_kosher() -> Explanation {
    Explanation {
        title: "Kosher",
        description: "\
Applies when the diner (or anyone in the group) keeps kosher.

An item flagged `notKosher` is not kosher certified. It is a violation and the
item is rated unsafe.",
        remediation: "\
Pick items that are not flagged `notKosher`.",
        examples: ExamplePair {
            before: r#"{ "name": "Shrimp Scampi", "notKosher": true }"#,
            after: r#"{ "name": "Garden Salad", "notKosher": false }"#,
        },
        outcomes: KOSHER_OUTCOMES,
    }
}

fn explain_allergens() -> Explanation {
    Explanation {
        title: "Allergens",
        description: "\
Compares the allergens listed on the item with the diner's allergens.

Every allergen present in both produces its own violation line
(\"Contains Dairy\"), and the item is rated unsafe. Matching is exact and
case-insensitive; custom allergens are matched the same way.",
        remediation: "\
Choose items whose allergen list does not include any of yours, or ask the
restaurant about an allergen-free preparation.",
        examples: ExamplePair {
            before: r#"{ "name": "Chicken Bryan", "allergens": ["dairy"] }"#,
            after: r#"{ "name": "Grilled Salmon", "allergens": ["fish"] }"#,
        },
        outcomes: ALLERGEN_OUTCOMES,
    }
}

fn explain_vegetarian() -> Explanation {
    Explanation {
        title: "Vegetarian",
        description: "\
Applies when the diner follows a vegetarian diet.

An item flagged `notVegetarian` contains meat and is rated unsafe.",
        remediation: "\
Pick items without the `notVegetarian` flag.",
        examples: ExamplePair {
            before: r#"{ "name": "Lasagne", "notVegetarian": true }"#,
            after: r#"{ "name": "Eggplant Parmesan", "notVegetarian": false }"#,
        },
        outcomes: VEGETARIAN_OUTCOMES,
    }
}

fn explain_vegan() -> Explanation {
    Explanation {
        title: "Vegan",
        description: "\
Applies when the diner follows a vegan diet.

An item flagged `notVegan` contains animal products and is rated unsafe.",
        remediation: "\
Pick items without the `notVegan` flag.",
        examples: ExamplePair {
            before: r#"{ "name": "Mac & Cheese", "notVegan": true }"#,
            after: r#"{ "name": "Sofritas Bowl", "notVegan": false }"#,
        },
        outcomes: VEGAN_OUTCOMES,
    }
}

fn explain_sodium() -> Explanation {
    Explanation {
        title: "Sodium",
        description: "\
Compares the item's sodium with the diner's limit (600mg when none is set).

- above 1.5x the limit: violation, item rated unsafe
- above the limit: warning, item rated at least caution
- otherwise: a confirmation line stating the sodium is within the limit

The excess reported is always measured against the limit itself.",
        remediation: "\
Ask for sauces and dressings on the side, or pick a lighter item. A custom
limit can be set with `max_sodium_mg` in greenlight.toml.",
        examples: ExamplePair {
            before: r#"{ "name": "Chicken Bryan", "nutrition": { "sodium": 1490 } }"#,
            after: r#"{ "name": "Grilled Salmon", "nutrition": { "sodium": 320 } }"#,
        },
        outcomes: SODIUM_OUTCOMES,
    }
}

fn explain_sugar() -> Explanation {
    Explanation {
        title: "Sugar",
        description: "\
Compares the item's sugar with the diner's limit (25g when none is set).

- above 1.5x the limit: violation, item rated unsafe
- above the limit: warning, item rated at least caution
- otherwise: a confirmation line stating the sugar is within the limit",
        remediation: "\
Skip sweetened drinks and glazes, or share desserts. A custom limit can be set
with `max_sugar_g` in greenlight.toml.",
        examples: ExamplePair {
            before: r#"{ "name": "Cheesecake", "nutrition": { "sugar": 62 } }"#,
            after: r#"{ "name": "Fresh Berries", "nutrition": { "sugar": 12 } }"#,
        },
        outcomes: SUGAR_OUTCOMES,
    }
}

// --- Code-level explanations ---

fn narrowed(mut exp: Explanation, outcomes: &'static [Outcome]) -> Explanation {
    exp.outcomes = outcomes;
    exp
}

fn explain_sodium_high() -> Explanation {
    let mut exp = narrowed(explain_sodium(), &SODIUM_OUTCOMES[..1]);
    exp.title = "High Sodium";
    exp
}

fn explain_sodium_elevated() -> Explanation {
    let mut exp = narrowed(explain_sodium(), &SODIUM_OUTCOMES[1..2]);
    exp.title = "Elevated Sodium";
    exp.examples = ExamplePair {
        before: r#"{ "name": "Chicken Marsala", "nutrition": { "sodium": 780 } }"#,
        after: r#"{ "name": "Grilled Salmon", "nutrition": { "sodium": 320 } }"#,
    };
    exp
}

fn explain_sugar_high() -> Explanation {
    let mut exp = narrowed(explain_sugar(), &SUGAR_OUTCOMES[..1]);
    exp.title = "High Sugar";
    exp
}

fn explain_sugar_elevated() -> Explanation {
    let mut exp = narrowed(explain_sugar(), &SUGAR_OUTCOMES[1..2]);
    exp.title = "Elevated Sugar";
    exp.examples = ExamplePair {
        before: r#"{ "name": "Teriyaki Bowl", "nutrition": { "sugar": 31 } }"#,
        after: r#"{ "name": "Fresh Berries", "nutrition": { "sugar": 12 } }"#,
    };
    exp
}
