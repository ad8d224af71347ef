use crate::policy::SafetyLimits;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Defines a restriction category: a closed set of known identifiers plus a
/// `Custom` variant for user-defined text. Parsing trims and lowercases, so
/// equality is exact and case-insensitive.
macro_rules! restriction_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Custom(String),
        }

        impl $name {
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            pub fn parse(input: &str) -> Self {
                let normalized = normalize(input);
                match normalized.as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::Custom(normalized),
                }
            }

            /// Parse only the known identifiers; custom text yields `None`.
            pub fn parse_known(input: &str) -> Option<Self> {
                match Self::parse(input) {
                    $name::Custom(_) => None,
                    known => Some(known),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Custom(text) => text.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::parse(&value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Custom(text) => text,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

restriction_enum! {
    /// Allergen present in an item or avoided by a diner.
    Allergen {
        Gluten => "gluten",
        Peanuts => "peanuts",
        Dairy => "dairy",
        Shellfish => "shellfish",
        Soy => "soy",
        Eggs => "eggs",
        TreeNuts => "tree-nuts",
        Wheat => "wheat",
        Fish => "fish",
    }
}

restriction_enum! {
    /// Dietary regime followed by a diner.
    DietaryRegime {
        LowSodium => "low-sodium",
        Diabetic => "diabetic",
        Vegetarian => "vegetarian",
        Vegan => "vegan",
        Keto => "keto",
        LowCarb => "low-carb",
    }
}

restriction_enum! {
    /// Religious regime. `None` is a sentinel that never matches anything.
    Religious {
        Halal => "halal",
        Kosher => "kosher",
        None => "none",
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Merged restriction set for one diner or a dining group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DietaryProfile {
    #[serde(default)]
    pub allergens: BTreeSet<Allergen>,
    #[serde(default)]
    pub dietary: BTreeSet<DietaryRegime>,
    #[serde(default)]
    pub religious: BTreeSet<Religious>,

    /// Per-meal sodium ceiling; `None` means the engine default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sodium_mg: Option<f64>,
    /// Per-meal sugar ceiling; `None` means the engine default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sugar_g: Option<f64>,
}

impl DietaryProfile {
    /// Build a profile from a flat restriction list (a companion's restrictions).
    ///
    /// Each entry lands in the category whose known identifiers contain it.
    /// Unknown entries are kept as custom allergens. Blank entries are dropped.
    pub fn from_restrictions<I, S>(restrictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut profile = DietaryProfile::default();
        for raw in restrictions {
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                continue;
            }
            if let Some(allergen) = Allergen::parse_known(raw) {
                profile.allergens.insert(allergen);
            } else if let Some(regime) = DietaryRegime::parse_known(raw) {
                profile.dietary.insert(regime);
            } else if let Some(religious) = Religious::parse_known(raw) {
                profile.religious.insert(religious);
            } else {
                profile.allergens.insert(Allergen::parse(raw));
            }
        }
        profile
    }

    pub fn effective_max_sodium_mg(&self, limits: &SafetyLimits) -> f64 {
        self.max_sodium_mg.unwrap_or(limits.default_max_sodium_mg)
    }

    pub fn effective_max_sugar_g(&self, limits: &SafetyLimits) -> f64 {
        self.max_sugar_g.unwrap_or(limits.default_max_sugar_g)
    }

    pub fn keeps(&self, religious: &Religious) -> bool {
        *religious != Religious::None && self.religious.contains(religious)
    }

    pub fn follows(&self, regime: &DietaryRegime) -> bool {
        self.dietary.contains(regime)
    }

    pub fn avoids(&self, allergen: &Allergen) -> bool {
        self.allergens.contains(allergen)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default, rename = "sodium", alias = "sodiumMg")]
    pub sodium_mg: f64,
    #[serde(default, rename = "sugar", alias = "sugarG")]
    pub sugar_g: f64,
}

/// A menu item as supplied by the data layer. Never mutated by the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: String,

    /// Free-form labels shown to the diner. Only the loose matcher reads them.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub nutrition: Nutrition,
    #[serde(default)]
    pub allergens: Vec<Allergen>,

    #[serde(default)]
    pub not_halal: bool,
    #[serde(default)]
    pub not_kosher: bool,
    #[serde(default)]
    pub not_vegetarian: bool,
    #[serde(default)]
    pub not_vegan: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub menu: Vec<MenuItem>,
}

/// All restaurants known to the data layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
}
