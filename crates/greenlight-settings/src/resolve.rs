use crate::model::{GreenlightConfigV1, PreferencesConfig, SCHEMA_CONFIG_V1};
use greenlight_domain::merge;
use greenlight_domain::model::{Allergen, DietaryProfile, DietaryRegime, Religious};
use greenlight_domain::policy::SafetyLimits;
use greenlight_types::SafetyLevel;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub max_sodium_mg: Option<f64>,
    pub max_sugar_g: Option<f64>,
    /// Evaluate for the user alone, ignoring configured companions.
    pub solo: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Companion {
    pub name: String,
    pub profile: DietaryProfile,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    /// The user's own profile, overrides applied.
    pub user: DietaryProfile,
    pub companions: Vec<Companion>,
    /// User and companions merged; this is what items are classified against.
    pub profile: DietaryProfile,
    pub limits: SafetyLimits,
}

impl ResolvedConfig {
    /// Diners covered by `profile`.
    pub fn members(&self) -> u32 {
        1 + self.companions.len() as u32
    }
}

pub fn resolve_config(
    cfg: GreenlightConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let limits = SafetyLimits::default();

    let mut user = user_profile(&cfg.preferences);
    user.max_sodium_mg = overrides.max_sodium_mg.or(cfg.preferences.max_sodium_mg);
    user.max_sugar_g = overrides.max_sugar_g.or(cfg.preferences.max_sugar_g);
    validate_limit("max_sodium_mg", user.max_sodium_mg)?;
    validate_limit("max_sugar_g", user.max_sugar_g)?;

    let companions: Vec<Companion> = if overrides.solo {
        Vec::new()
    } else {
        cfg.companions
            .iter()
            .enumerate()
            .map(|(idx, c)| {
                let name = c.name.trim();
                if name.is_empty() {
                    anyhow::bail!("companion #{} has an empty name", idx + 1);
                }
                Ok(Companion {
                    name: name.to_string(),
                    profile: DietaryProfile::from_restrictions(&c.restrictions),
                })
            })
            .collect::<anyhow::Result<_>>()?
    };

    let profile = merge(
        std::iter::once(&user).chain(companions.iter().map(|c| &c.profile)),
        &limits,
    );

    Ok(ResolvedConfig {
        user,
        companions,
        profile,
        limits,
    })
}

/// Parse a `--level` value.
pub fn parse_level(v: &str) -> anyhow::Result<SafetyLevel> {
    match v {
        "safe" => Ok(SafetyLevel::Safe),
        "caution" => Ok(SafetyLevel::Caution),
        "unsafe" => Ok(SafetyLevel::Unsafe),
        other => anyhow::bail!("unknown level: {other} (expected safe|caution|unsafe)"),
    }
}

fn user_profile(prefs: &PreferencesConfig) -> DietaryProfile {
    DietaryProfile {
        allergens: non_blank(&prefs.allergens)
            .chain(non_blank(&prefs.custom_allergens))
            .map(Allergen::parse)
            .collect(),
        dietary: non_blank(&prefs.dietary)
            .chain(non_blank(&prefs.custom_dietary))
            .map(DietaryRegime::parse)
            .collect(),
        religious: non_blank(&prefs.religious)
            .chain(non_blank(&prefs.custom_religious))
            .map(Religious::parse)
            .collect(),
        ..DietaryProfile::default()
    }
}

fn non_blank(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

fn validate_limit(field: &str, value: Option<f64>) -> anyhow::Result<()> {
    let Some(v) = value else {
        return Ok(());
    };
    if !v.is_finite() || v < 0.0 {
        anyhow::bail!("invalid {field}: {v} is not a finite, non-negative number");
    }
    Ok(())
}
