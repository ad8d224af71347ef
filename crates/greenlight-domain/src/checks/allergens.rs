use super::utils::{capitalize, reason};
use crate::model::{DietaryProfile, MenuItem};
use greenlight_types::{ids, Reason, ReasonKind};
use serde_json::json;
use std::collections::BTreeSet;

/// One violation per allergen the item shares with the profile, in item order.
pub fn run(item: &MenuItem, profile: &DietaryProfile, out: &mut Vec<Reason>) {
    let mut seen = BTreeSet::new();

    for allergen in &item.allergens {
        if !profile.avoids(allergen) || !seen.insert(allergen) {
            continue;
        }
        out.push(reason(
            ReasonKind::Violation,
            ids::RULE_ALLERGENS_PRESENT,
            ids::CODE_CONTAINS_ALLERGEN,
            format!("Contains {}", capitalize(allergen.as_str())),
            json!({
                "item": item.id,
                "allergen": allergen.as_str(),
            }),
        ));
    }
}
