use super::utils::reason;
use crate::model::{DietaryProfile, DietaryRegime, MenuItem};
use greenlight_types::{ids, Reason, ReasonKind};
use serde_json::json;

pub fn run(item: &MenuItem, profile: &DietaryProfile, out: &mut Vec<Reason>) {
    if profile.follows(&DietaryRegime::Vegetarian) && item.not_vegetarian {
        out.push(reason(
            ReasonKind::Violation,
            ids::RULE_DIETARY_VEGETARIAN,
            ids::CODE_NOT_VEGETARIAN,
            "Not Vegetarian – contains meat".to_string(),
            json!({ "item": item.id }),
        ));
    }

    if profile.follows(&DietaryRegime::Vegan) && item.not_vegan {
        out.push(reason(
            ReasonKind::Violation,
            ids::RULE_DIETARY_VEGAN,
            ids::CODE_NOT_VEGAN,
            "Not Vegan – contains animal products".to_string(),
            json!({ "item": item.id }),
        ));
    }
}
