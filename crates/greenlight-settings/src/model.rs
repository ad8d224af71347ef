use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "greenlight.config.v1";

/// `greenlight.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GreenlightConfigV1 {
    /// Optional schema string for tooling (`greenlight.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// People dining with the user. Ignored with `--solo`.
    #[serde(default)]
    pub companions: Vec<CompanionConfig>,
}

/// The user's own dietary preferences.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PreferencesConfig {
    /// Known allergens, e.g. `gluten`, `peanuts`, `tree-nuts`.
    #[serde(default)]
    pub allergens: Vec<String>,

    /// Known regimes, e.g. `vegan`, `low-sodium`.
    #[serde(default)]
    pub dietary: Vec<String>,

    /// `halal`, `kosher` or `none`.
    #[serde(default)]
    pub religious: Vec<String>,

    #[serde(default)]
    pub custom_allergens: Vec<String>,
    #[serde(default)]
    pub custom_dietary: Vec<String>,
    #[serde(default)]
    pub custom_religious: Vec<String>,

    /// Per-meal sodium ceiling in milligrams (default 600).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sodium_mg: Option<f64>,

    /// Per-meal sugar ceiling in grams (default 25).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sugar_g: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompanionConfig {
    pub name: String,

    /// Flat restriction list; each entry is sorted into allergen, dietary or
    /// religious by name, and unknown entries are treated as allergens.
    #[serde(default)]
    pub restrictions: Vec<String>,
}
