//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Verdict level agreeing with the reasons that produced it
//! - Monotonicity as restrictions are added
//! - Rollup consistency with per-item classification
//! - Group merge, tag matching, and group ranking

use crate::engine::{aggregate, classify, classify_level};
use crate::loose::classify_level_only;
use crate::merge::merge;
use crate::model::{Allergen, DietaryProfile, DietaryRegime, MenuItem, Nutrition, Religious};
use crate::policy::SafetyLimits;
use crate::ranking::{rank_for_group, sort_by_safety};
use crate::test_support::restaurant;
use greenlight_types::{ReasonKind, SafetyLevel, TagMatching};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_allergen() -> impl Strategy<Value = Allergen> {
    prop_oneof![
        4 => prop::sample::select(Allergen::KNOWN.to_vec()),
        1 => "[a-z]{3,8}".prop_map(|s| Allergen::parse(&s)),
    ]
}

fn arb_regime() -> impl Strategy<Value = DietaryRegime> {
    prop::sample::select(DietaryRegime::KNOWN.to_vec())
}

fn arb_religious() -> impl Strategy<Value = Religious> {
    prop::sample::select(Religious::KNOWN.to_vec())
}

fn arb_limit() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(0u32..2000).prop_map(|v| v.map(f64::from))
}

fn arb_profile() -> impl Strategy<Value = DietaryProfile> {
    (
        prop::collection::btree_set(arb_allergen(), 0..4),
        prop::collection::btree_set(arb_regime(), 0..3),
        prop::collection::btree_set(arb_religious(), 0..3),
        arb_limit(),
        arb_limit(),
    )
        .prop_map(
            |(allergens, dietary, religious, max_sodium_mg, max_sugar_g)| DietaryProfile {
                allergens,
                dietary,
                religious,
                max_sodium_mg,
                max_sugar_g,
            },
        )
}

fn arb_item() -> impl Strategy<Value = MenuItem> {
    (
        "[a-z]{1,6}",
        prop::collection::vec(arb_allergen(), 0..4),
        prop::collection::vec("[a-z]{1,8}", 0..3),
        0u32..3000,
        0u32..100,
        any::<[bool; 4]>(),
    )
        .prop_map(|(id, allergens, tags, sodium, sugar, flags)| MenuItem {
            name: id.clone(),
            id,
            tags,
            allergens,
            nutrition: Nutrition {
                sodium_mg: f64::from(sodium),
                sugar_g: f64::from(sugar),
                ..Nutrition::default()
            },
            not_halal: flags[0],
            not_kosher: flags[1],
            not_vegetarian: flags[2],
            not_vegan: flags[3],
            ..MenuItem::default()
        })
}

fn expected_level(kinds: impl Iterator<Item = ReasonKind>) -> SafetyLevel {
    kinds
        .map(|kind| match kind {
            ReasonKind::Violation => SafetyLevel::Unsafe,
            ReasonKind::Warning => SafetyLevel::Caution,
            ReasonKind::Confirmation => SafetyLevel::Safe,
        })
        .max()
        .unwrap_or(SafetyLevel::Safe)
}

// ============================================================================
// Classification
// ============================================================================

proptest! {
    #[test]
    fn level_is_worst_reason(item in arb_item(), profile in arb_profile()) {
        let verdict = classify(&item, &profile, &SafetyLimits::default());
        prop_assert_eq!(
            verdict.level,
            expected_level(verdict.reasons.iter().map(|r| r.kind))
        );
    }

    #[test]
    fn classification_is_idempotent(item in arb_item(), profile in arb_profile()) {
        let limits = SafetyLimits::default();
        let first = classify(&item, &profile, &limits);
        let second = classify(&item, &profile, &limits);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(classify_level(&item, &profile, &limits), first.level);
    }

    #[test]
    fn every_item_gets_one_reason_per_nutrient(item in arb_item(), profile in arb_profile()) {
        let verdict = classify(&item, &profile, &SafetyLimits::default());
        let n = verdict.reasons.len();
        prop_assert!(n >= 2);
        prop_assert_eq!(verdict.reasons[n - 2].rule_id.as_str(), "nutrition.sodium");
        prop_assert_eq!(verdict.reasons[n - 1].rule_id.as_str(), "nutrition.sugar");
    }

    #[test]
    fn adding_an_allergen_never_improves_the_level(
        item in arb_item(),
        profile in arb_profile(),
        extra in arb_allergen(),
    ) {
        let limits = SafetyLimits::default();
        let before = classify_level(&item, &profile, &limits);

        let mut stricter = profile.clone();
        stricter.allergens.insert(extra);
        let after = classify_level(&item, &stricter, &limits);

        prop_assert!(after >= before);
    }

    #[test]
    fn lowering_a_limit_never_improves_the_level(
        item in arb_item(),
        profile in arb_profile(),
        cut in 0u32..500,
    ) {
        let limits = SafetyLimits::default();
        let before = classify_level(&item, &profile, &limits);

        let mut stricter = profile.clone();
        let sodium = profile.effective_max_sodium_mg(&limits);
        stricter.max_sodium_mg = Some((sodium - f64::from(cut)).max(0.0));
        let after = classify_level(&item, &stricter, &limits);

        prop_assert!(after >= before);
    }

    #[test]
    fn sodium_thresholds_follow_the_limit(sodium in 0u32..3000, max in 1u32..1500) {
        let limits = SafetyLimits::default();
        let profile = DietaryProfile {
            max_sodium_mg: Some(f64::from(max)),
            ..DietaryProfile::default()
        };
        let item = MenuItem {
            nutrition: Nutrition { sodium_mg: f64::from(sodium), ..Nutrition::default() },
            ..MenuItem::default()
        };

        let verdict = classify(&item, &profile, &limits);
        let actual = f64::from(sodium);
        let max = f64::from(max);
        let expected = if actual > max * 1.5 {
            SafetyLevel::Unsafe
        } else if actual > max {
            SafetyLevel::Caution
        } else {
            SafetyLevel::Safe
        };
        prop_assert_eq!(verdict.level, expected);

        match verdict.exceeds_by {
            Some(excess) => {
                prop_assert_eq!(excess.sodium_mg, actual - max);
            }
            None => {
                prop_assert!(actual <= max);
            }
        }
    }
}

// ============================================================================
// Rollup
// ============================================================================

proptest! {
    #[test]
    fn rollup_counts_match_classification(
        items in prop::collection::vec(arb_item(), 0..12),
        profile in arb_profile(),
    ) {
        let limits = SafetyLimits::default();
        let rollup = aggregate(&items, &profile, &limits);

        let safe = items
            .iter()
            .filter(|i| classify_level(i, &profile, &limits) == SafetyLevel::Safe)
            .count() as u32;
        prop_assert_eq!(rollup.safe_count, safe);
        prop_assert_eq!(rollup.total as usize, items.len());
        prop_assert_eq!(
            rollup.safe_count + rollup.caution_count + rollup.unsafe_count,
            rollup.total
        );
        prop_assert!(rollup.safe_percent <= 100);
        if rollup.safe_percent >= 50 {
            prop_assert_eq!(rollup.level, SafetyLevel::Safe);
        }
        if items.is_empty() {
            prop_assert_eq!(rollup.level, SafetyLevel::Unsafe);
        }
    }

    #[test]
    fn sort_by_safety_orders_levels(levels in prop::collection::vec(
        prop::sample::select(vec![SafetyLevel::Safe, SafetyLevel::Caution, SafetyLevel::Unsafe]),
        0..20,
    )) {
        let mut sorted = levels.clone();
        sort_by_safety(&mut sorted, |l| *l);
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(sorted.len(), levels.len());
    }
}

// ============================================================================
// Group merge and loose matching
// ============================================================================

proptest! {
    #[test]
    fn merged_profile_is_at_least_as_strict_as_each_member(
        a in arb_profile(),
        b in arb_profile(),
        item in arb_item(),
    ) {
        let limits = SafetyLimits::default();
        let group = merge([&a, &b], &limits);

        prop_assert!(group.effective_max_sodium_mg(&limits) <= a.effective_max_sodium_mg(&limits));
        prop_assert!(group.effective_max_sugar_g(&limits) <= b.effective_max_sugar_g(&limits));
        prop_assert!(a.allergens.is_subset(&group.allergens));
        prop_assert!(b.dietary.is_subset(&group.dietary));

        let member = classify_level(&item, &a, &limits);
        prop_assert!(classify_level(&item, &group, &limits) >= member);
    }

    #[test]
    fn none_sentinel_never_coexists_with_real_religion(profiles in prop::collection::vec(arb_profile(), 0..4)) {
        let merged = merge(profiles.iter(), &SafetyLimits::default());
        if merged.religious.len() > 1 {
            prop_assert!(!merged.religious.contains(&Religious::None));
        }
    }

    #[test]
    fn loose_matching_never_yields_caution(
        item in arb_item(),
        restrictions in prop::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        prop_assert_ne!(classify_level_only(&item, &restrictions), SafetyLevel::Caution);
    }

    #[test]
    fn group_ranking_is_sorted_and_never_empty(
        menus in prop::collection::vec(prop::collection::vec(arb_item(), 0..5), 0..6),
        restrictions in prop::collection::vec("[a-z]{1,8}", 0..3),
        loose in any::<bool>(),
    ) {
        let restaurants: Vec<_> = menus
            .into_iter()
            .enumerate()
            .map(|(i, menu)| restaurant(&format!("r{i}"), menu))
            .collect();

        let matching = if loose { TagMatching::Loose } else { TagMatching::Exact };
        let ranked = rank_for_group(&restaurants, &restrictions, matching);
        prop_assert!(ranked.iter().all(|r| !r.safe_items.is_empty()));
        prop_assert!(ranked.windows(2).all(|w| w[0].safe_items.len() >= w[1].safe_items.len()));
    }

    #[test]
    fn exact_ranking_keeps_at_least_what_loose_keeps(
        menu in prop::collection::vec(arb_item(), 0..6),
        restrictions in prop::collection::vec("[a-z]{1,8}", 0..3),
    ) {
        let restaurants = vec![restaurant("r", menu)];
        let count = |matching: TagMatching| {
            rank_for_group(&restaurants, &restrictions, matching)
                .first()
                .map_or(0, |r| r.safe_items.len())
        };
        prop_assert!(count(TagMatching::Exact) >= count(TagMatching::Loose));
    }
}
