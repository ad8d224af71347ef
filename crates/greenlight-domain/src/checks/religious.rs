use super::utils::reason;
use crate::model::{DietaryProfile, MenuItem, Religious};
use greenlight_types::{ids, Reason, ReasonKind};
use serde_json::json;

pub fn run(item: &MenuItem, profile: &DietaryProfile, out: &mut Vec<Reason>) {
    if profile.keeps(&Religious::Halal) && item.not_halal {
        out.push(reason(
            ReasonKind::Violation,
            ids::RULE_RELIGIOUS_HALAL,
            ids::CODE_NOT_HALAL,
            "Not Halal – contains pork or alcohol".to_string(),
            json!({ "item": item.id }),
        ));
    }

    if profile.keeps(&Religious::Kosher) && item.not_kosher {
        out.push(reason(
            ReasonKind::Violation,
            ids::RULE_RELIGIOUS_KOSHER,
            ids::CODE_NOT_KOSHER,
            "Not Kosher – not kosher certified".to_string(),
            json!({ "item": item.id }),
        ));
    }
}
