use crate::checks;
use crate::model::{DietaryProfile, MenuItem};
use crate::policy::SafetyLimits;
use crate::rollup::{rollup_from_counts, LevelCounts};
use greenlight_types::{Reason, ReasonKind, RestaurantRollup, SafetyLevel, SafetyVerdict};

/// Classify one item against a merged profile. Total: never fails and never
/// validates its inputs.
pub fn classify(
    item: &MenuItem,
    profile: &DietaryProfile,
    limits: &SafetyLimits,
) -> SafetyVerdict {
    let mut reasons: Vec<Reason> = Vec::new();

    let exceeds_by = checks::run_all(item, profile, limits, &mut reasons);

    SafetyVerdict {
        level: compute_level(&reasons),
        reasons,
        exceeds_by,
    }
}

/// Level only; always equal to `classify(..).level`.
pub fn classify_level(
    item: &MenuItem,
    profile: &DietaryProfile,
    limits: &SafetyLimits,
) -> SafetyLevel {
    classify(item, profile, limits).level
}

/// Roll a menu up into restaurant-level statistics.
pub fn aggregate(
    items: &[MenuItem],
    profile: &DietaryProfile,
    limits: &SafetyLimits,
) -> RestaurantRollup {
    let counts =
        LevelCounts::from_levels(items.iter().map(|i| classify_level(i, profile, limits)));
    rollup_from_counts(counts, limits)
}

/// Verdicts for every item (in menu order) plus the rollup they imply.
#[derive(Clone, Debug)]
pub struct MenuEvaluation {
    pub verdicts: Vec<SafetyVerdict>,
    pub rollup: RestaurantRollup,
}

pub fn evaluate_menu(
    items: &[MenuItem],
    profile: &DietaryProfile,
    limits: &SafetyLimits,
) -> MenuEvaluation {
    let verdicts: Vec<SafetyVerdict> =
        items.iter().map(|i| classify(i, profile, limits)).collect();
    let counts = LevelCounts::from_levels(verdicts.iter().map(|v| v.level));

    MenuEvaluation {
        rollup: rollup_from_counts(counts, limits),
        verdicts,
    }
}

/// Worst violation wins.
fn compute_level(reasons: &[Reason]) -> SafetyLevel {
    let has_unsafe = reasons.iter().any(|r| r.kind == ReasonKind::Violation);
    if has_unsafe {
        return SafetyLevel::Unsafe;
    }

    let has_caution = reasons.iter().any(|r| r.kind == ReasonKind::Warning);
    if has_caution {
        return SafetyLevel::Caution;
    }

    SafetyLevel::Safe
}
