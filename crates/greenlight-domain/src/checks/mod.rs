use crate::model::{DietaryProfile, MenuItem};
use crate::policy::SafetyLimits;
use greenlight_types::{NutrientExcess, Reason};

mod allergens;
mod dietary;
mod nutrition;
mod religious;
mod utils;

#[cfg(test)]
mod tests;

/// Run every rule against `item`, appending reasons in rule order:
/// religious, allergens, vegetarian/vegan, sodium, sugar.
///
/// Returns the nutrient excess when sodium or sugar is above its limit.
pub fn run_all(
    item: &MenuItem,
    profile: &DietaryProfile,
    limits: &SafetyLimits,
    out: &mut Vec<Reason>,
) -> Option<NutrientExcess> {
    religious::run(item, profile, out);
    allergens::run(item, profile, out);
    dietary::run(item, profile, out);

    let sodium = nutrition::run_sodium(item, profile, limits, out);
    let sugar = nutrition::run_sugar(item, profile, limits, out);

    if sodium.is_none() && sugar.is_none() {
        return None;
    }
    Some(NutrientExcess {
        sodium_mg: sodium.unwrap_or(0.0),
        sugar_g: sugar.unwrap_or(0.0),
    })
}
