use super::{allergens, dietary, nutrition, religious, run_all, utils};
use crate::model::{Allergen, DietaryProfile, DietaryRegime, Religious};
use crate::policy::SafetyLimits;
use crate::test_support::{item, item_with_nutrition, profile_with};
use greenlight_types::{ids, ReasonKind};

#[test]
fn religious_ignores_none_sentinel_and_unflagged_items() {
    let mut dish = item("pork");
    dish.not_halal = true;
    dish.not_kosher = true;

    let mut out = Vec::new();
    religious::run(&dish, &profile_with(&[], &[], &[Religious::None]), &mut out);
    assert!(out.is_empty());

    let mut out = Vec::new();
    religious::run(
        &item("salad"),
        &profile_with(&[], &[], &[Religious::Halal, Religious::Kosher]),
        &mut out,
    );
    assert!(out.is_empty());
}

#[test]
fn religious_reports_halal_before_kosher() {
    let mut dish = item("pork");
    dish.not_halal = true;
    dish.not_kosher = true;

    let mut out = Vec::new();
    religious::run(
        &dish,
        &profile_with(&[], &[], &[Religious::Kosher, Religious::Halal]),
        &mut out,
    );
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].code, ids::CODE_NOT_HALAL);
    assert_eq!(out[1].code, ids::CODE_NOT_KOSHER);
    assert!(out.iter().all(|r| r.kind == ReasonKind::Violation));
    assert_eq!(out[0].data["item"], "pork");
}

#[test]
fn custom_religious_restriction_never_triggers_strict_rules() {
    let mut dish = item("pork");
    dish.not_halal = true;

    let mut out = Vec::new();
    religious::run(
        &dish,
        &profile_with(&[], &[], &[Religious::parse("jain")]),
        &mut out,
    );
    assert!(out.is_empty());
}

#[test]
fn allergens_report_each_match_in_item_order_once() {
    let mut dish = item("pad-thai");
    dish.allergens = vec![
        Allergen::Peanuts,
        Allergen::Soy,
        Allergen::Eggs,
        Allergen::Peanuts,
    ];
    let profile = profile_with(&[Allergen::Eggs, Allergen::Peanuts], &[], &[]);

    let mut out = Vec::new();
    allergens::run(&dish, &profile, &mut out);

    let messages: Vec<&str> = out.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["Contains Peanuts", "Contains Eggs"]);
    assert_eq!(out[0].data["allergen"], "peanuts");
    assert_eq!(out[0].rule_id, ids::RULE_ALLERGENS_PRESENT);
}

#[test]
fn custom_allergens_match_case_insensitively() {
    let mut dish = item("hummus");
    dish.allergens = vec![Allergen::parse("SESAME")];
    let profile = DietaryProfile::from_restrictions(["Sesame"]);

    let mut out = Vec::new();
    allergens::run(&dish, &profile, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].message, "Contains Sesame");
}

#[test]
fn allergens_are_not_matched_by_substring() {
    let mut dish = item("bread");
    dish.allergens = vec![Allergen::Wheat];
    let profile = DietaryProfile::from_restrictions(["whe"]);

    let mut out = Vec::new();
    allergens::run(&dish, &profile, &mut out);
    assert!(out.is_empty());
}

#[test]
fn dietary_checks_vegetarian_then_vegan() {
    let mut dish = item("steak");
    dish.not_vegetarian = true;
    dish.not_vegan = true;
    let profile = profile_with(
        &[],
        &[DietaryRegime::Vegan, DietaryRegime::Vegetarian],
        &[],
    );

    let mut out = Vec::new();
    dietary::run(&dish, &profile, &mut out);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].code, ids::CODE_NOT_VEGETARIAN);
    assert_eq!(out[1].code, ids::CODE_NOT_VEGAN);
}

#[test]
fn vegetarian_profile_accepts_dairy_dish() {
    let mut dish = item("mac");
    dish.not_vegan = true;
    let profile = profile_with(&[], &[DietaryRegime::Vegetarian], &[]);

    let mut out = Vec::new();
    dietary::run(&dish, &profile, &mut out);
    assert!(out.is_empty());
}

#[test]
fn sodium_at_limit_is_within() {
    let limits = SafetyLimits::default();
    let mut out = Vec::new();
    let excess = nutrition::run_sodium(
        &item_with_nutrition("x", 600.0, 0.0),
        &DietaryProfile::default(),
        &limits,
        &mut out,
    );
    assert!(excess.is_none());
    assert_eq!(out[0].kind, ReasonKind::Confirmation);
    assert_eq!(out[0].message, "Sodium: 600mg (within your 600mg limit)");
}

#[test]
fn sodium_at_one_and_a_half_limit_is_only_a_warning() {
    let limits = SafetyLimits::default();
    let mut out = Vec::new();
    let excess = nutrition::run_sodium(
        &item_with_nutrition("x", 900.0, 0.0),
        &DietaryProfile::default(),
        &limits,
        &mut out,
    );
    assert_eq!(excess, Some(300.0));
    assert_eq!(out[0].kind, ReasonKind::Warning);
    assert_eq!(out[0].code, ids::CODE_SODIUM_ELEVATED);
    assert_eq!(
        out[0].message,
        "Elevated Sodium: 900mg (300mg over your 600mg limit)"
    );
}

#[test]
fn sodium_above_one_and_a_half_limit_is_a_violation() {
    let limits = SafetyLimits::default();
    let mut out = Vec::new();
    nutrition::run_sodium(
        &item_with_nutrition("x", 901.0, 0.0),
        &DietaryProfile::default(),
        &limits,
        &mut out,
    );
    assert_eq!(out[0].kind, ReasonKind::Violation);
    assert_eq!(out[0].code, ids::CODE_SODIUM_HIGH);
    assert_eq!(out[0].data["excess"], 301.0);
    assert_eq!(out[0].data["limit"], 600.0);
}

#[test]
fn custom_sugar_limit_is_used_in_messages() {
    let limits = SafetyLimits::default();
    let profile = DietaryProfile {
        max_sugar_g: Some(10.0),
        ..DietaryProfile::default()
    };

    let mut out = Vec::new();
    let excess = nutrition::run_sugar(
        &item_with_nutrition("x", 0.0, 12.5),
        &profile,
        &limits,
        &mut out,
    );
    assert_eq!(excess, Some(2.5));
    assert_eq!(
        out[0].message,
        "Elevated Sugar: 12.5g (2.5g over your 10g limit)"
    );
}

#[test]
fn sugar_far_above_limit_is_high() {
    let mut out = Vec::new();
    nutrition::run_sugar(
        &item_with_nutrition("cheesecake", 0.0, 62.0),
        &DietaryProfile::default(),
        &SafetyLimits::default(),
        &mut out,
    );
    assert_eq!(
        out[0].message,
        "High Sugar: 62g (37g over your 25g limit)"
    );
}

#[test]
fn negative_nutrition_is_accepted_as_is() {
    let mut out = Vec::new();
    let excess = run_all(
        &item_with_nutrition("odd", -5.0, -1.0),
        &DietaryProfile::default(),
        &SafetyLimits::default(),
        &mut out,
    );
    assert!(excess.is_none());
    assert_eq!(out[0].message, "Sodium: -5mg (within your 600mg limit)");
}

#[test]
fn run_all_always_ends_with_sodium_then_sugar() {
    let mut out = Vec::new();
    run_all(
        &item("plain"),
        &DietaryProfile::default(),
        &SafetyLimits::default(),
        &mut out,
    );
    let rules: Vec<&str> = out.iter().map(|r| r.rule_id.as_str()).collect();
    assert_eq!(
        rules,
        vec![ids::RULE_NUTRITION_SODIUM, ids::RULE_NUTRITION_SUGAR]
    );
}

#[test]
fn capitalize_only_touches_first_character() {
    assert_eq!(utils::capitalize("tree-nuts"), "Tree-nuts");
    assert_eq!(utils::capitalize("dairy"), "Dairy");
    assert_eq!(utils::capitalize(""), "");
    assert_eq!(utils::capitalize("élan"), "Élan");
}
