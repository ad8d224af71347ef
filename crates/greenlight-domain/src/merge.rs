use crate::model::{DietaryProfile, Religious};
use crate::policy::SafetyLimits;

/// Merge the profiles of everyone dining together.
///
/// Restriction sets are unioned. The `none` religious sentinel survives only
/// when no member keeps an actual religious restriction. Numeric limits take
/// the minimum over members, with the engine default substituted for members
/// that set none; if no member sets a limit the merged limit stays unset.
pub fn merge<'a, I>(profiles: I, limits: &SafetyLimits) -> DietaryProfile
where
    I: IntoIterator<Item = &'a DietaryProfile>,
{
    let mut merged = DietaryProfile::default();
    let mut sodium: Option<f64> = None;
    let mut sugar: Option<f64> = None;
    let mut any_sodium = false;
    let mut any_sugar = false;

    for profile in profiles {
        merged.allergens.extend(profile.allergens.iter().cloned());
        merged.dietary.extend(profile.dietary.iter().cloned());
        merged.religious.extend(profile.religious.iter().cloned());

        any_sodium |= profile.max_sodium_mg.is_some();
        any_sugar |= profile.max_sugar_g.is_some();
        sodium = Some(min_limit(sodium, profile.effective_max_sodium_mg(limits)));
        sugar = Some(min_limit(sugar, profile.effective_max_sugar_g(limits)));
    }

    if merged.religious.iter().any(|r| *r != Religious::None) {
        merged.religious.remove(&Religious::None);
    }

    merged.max_sodium_mg = sodium.filter(|_| any_sodium);
    merged.max_sugar_g = sugar.filter(|_| any_sugar);
    merged
}

fn min_limit(current: Option<f64>, next: f64) -> f64 {
    match current {
        Some(current) => current.min(next),
        None => next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Allergen, DietaryRegime};
    use crate::test_support::profile_with;

    #[test]
    fn merging_nothing_yields_empty_profile() {
        let merged = merge(std::iter::empty(), &SafetyLimits::default());
        assert_eq!(merged, DietaryProfile::default());
    }

    #[test]
    fn restriction_sets_are_unioned() {
        let a = profile_with(&[Allergen::Gluten], &[DietaryRegime::Vegan], &[]);
        let b = profile_with(&[Allergen::Peanuts, Allergen::Gluten], &[], &[Religious::Kosher]);

        let merged = merge([&a, &b], &SafetyLimits::default());
        assert_eq!(merged.allergens.len(), 2);
        assert!(merged.follows(&DietaryRegime::Vegan));
        assert!(merged.keeps(&Religious::Kosher));
    }

    #[test]
    fn none_sentinel_dropped_beside_real_restriction() {
        let a = profile_with(&[], &[], &[Religious::None]);
        let b = profile_with(&[], &[], &[Religious::Halal]);

        let merged = merge([&a, &b], &SafetyLimits::default());
        assert!(!merged.religious.contains(&Religious::None));
        assert!(merged.keeps(&Religious::Halal));
    }

    #[test]
    fn none_sentinel_kept_when_nobody_has_religious_restrictions() {
        let a = profile_with(&[], &[], &[Religious::None]);
        let b = profile_with(&[Allergen::Soy], &[], &[]);

        let merged = merge([&a, &b], &SafetyLimits::default());
        assert!(merged.religious.contains(&Religious::None));
    }

    #[test]
    fn limits_take_the_most_restrictive_member() {
        let strict = DietaryProfile {
            max_sodium_mg: Some(400.0),
            max_sugar_g: Some(40.0),
            ..DietaryProfile::default()
        };
        let relaxed = DietaryProfile::default();

        let merged = merge([&strict, &relaxed], &SafetyLimits::default());
        assert_eq!(merged.max_sodium_mg, Some(400.0));
        // The relaxed member's default 25g beats the strict member's 40g.
        assert_eq!(merged.max_sugar_g, Some(25.0));
    }

    #[test]
    fn higher_custom_limit_is_capped_by_default_member() {
        let lenient = DietaryProfile {
            max_sodium_mg: Some(800.0),
            ..DietaryProfile::default()
        };
        let companion = DietaryProfile::default();

        let merged = merge([&lenient, &companion], &SafetyLimits::default());
        assert_eq!(merged.max_sodium_mg, Some(600.0));
        assert_eq!(merged.max_sugar_g, None);
    }

    #[test]
    fn single_profile_merges_to_itself() {
        let only = DietaryProfile {
            max_sodium_mg: Some(500.0),
            ..profile_with(&[Allergen::Fish], &[DietaryRegime::Keto], &[Religious::Halal])
        };
        let merged = merge([&only], &SafetyLimits::default());
        assert_eq!(merged, only);
    }
}
