use super::utils::reason;
use crate::model::{DietaryProfile, MenuItem};
use crate::policy::SafetyLimits;
use greenlight_types::{ids, Reason, ReasonKind};
use serde_json::json;

struct NutrientRule {
    rule_id: &'static str,
    label: &'static str,
    unit: &'static str,
    code_high: &'static str,
    code_elevated: &'static str,
    code_within: &'static str,
}

const SODIUM: NutrientRule = NutrientRule {
    rule_id: ids::RULE_NUTRITION_SODIUM,
    label: "Sodium",
    unit: "mg",
    code_high: ids::CODE_SODIUM_HIGH,
    code_elevated: ids::CODE_SODIUM_ELEVATED,
    code_within: ids::CODE_SODIUM_WITHIN,
};

const SUGAR: NutrientRule = NutrientRule {
    rule_id: ids::RULE_NUTRITION_SUGAR,
    label: "Sugar",
    unit: "g",
    code_high: ids::CODE_SUGAR_HIGH,
    code_elevated: ids::CODE_SUGAR_ELEVATED,
    code_within: ids::CODE_SUGAR_WITHIN,
};

pub fn run_sodium(
    item: &MenuItem,
    profile: &DietaryProfile,
    limits: &SafetyLimits,
    out: &mut Vec<Reason>,
) -> Option<f64> {
    let max = profile.effective_max_sodium_mg(limits);
    check(&SODIUM, item.nutrition.sodium_mg, max, limits, out)
}

pub fn run_sugar(
    item: &MenuItem,
    profile: &DietaryProfile,
    limits: &SafetyLimits,
    out: &mut Vec<Reason>,
) -> Option<f64> {
    let max = profile.effective_max_sugar_g(limits);
    check(&SUGAR, item.nutrition.sugar_g, max, limits, out)
}

/// Emits exactly one reason. Comparisons are strict: a value equal to the
/// limit passes and a value equal to `limit * multiplier` is only a warning.
/// Returns the excess over `max` when the limit is exceeded.
fn check(
    rule: &NutrientRule,
    actual: f64,
    max: f64,
    limits: &SafetyLimits,
    out: &mut Vec<Reason>,
) -> Option<f64> {
    let unit = rule.unit;

    if actual > max * limits.unsafe_multiplier {
        let excess = actual - max;
        out.push(reason(
            ReasonKind::Violation,
            rule.rule_id,
            rule.code_high,
            format!(
                "High {}: {actual}{unit} ({excess}{unit} over your {max}{unit} limit)",
                rule.label
            ),
            json!({ "actual": actual, "limit": max, "excess": excess, "unit": unit }),
        ));
        Some(excess)
    } else if actual > max {
        let excess = actual - max;
        out.push(reason(
            ReasonKind::Warning,
            rule.rule_id,
            rule.code_elevated,
            format!(
                "Elevated {}: {actual}{unit} ({excess}{unit} over your {max}{unit} limit)",
                rule.label
            ),
            json!({ "actual": actual, "limit": max, "excess": excess, "unit": unit }),
        ));
        Some(excess)
    } else {
        out.push(reason(
            ReasonKind::Confirmation,
            rule.rule_id,
            rule.code_within,
            format!(
                "{}: {actual}{unit} (within your {max}{unit} limit)",
                rule.label
            ),
            json!({ "actual": actual, "limit": max, "unit": unit }),
        ));
        None
    }
}
