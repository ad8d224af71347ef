use crate::model::{
    Allergen, DietaryProfile, DietaryRegime, MenuItem, Nutrition, Religious, Restaurant,
};

/// An item that passes every rule under default limits.
pub fn item(id: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: id.to_string(),
        ..MenuItem::default()
    }
}

pub fn item_with_nutrition(id: &str, sodium_mg: f64, sugar_g: f64) -> MenuItem {
    MenuItem {
        nutrition: Nutrition {
            sodium_mg,
            sugar_g,
            ..Nutrition::default()
        },
        ..item(id)
    }
}

pub fn item_with_tags(id: &str, tags: &[&str]) -> MenuItem {
    MenuItem {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..item(id)
    }
}

pub fn profile_with(
    allergens: &[Allergen],
    dietary: &[DietaryRegime],
    religious: &[Religious],
) -> DietaryProfile {
    DietaryProfile {
        allergens: allergens.iter().cloned().collect(),
        dietary: dietary.iter().cloned().collect(),
        religious: religious.iter().cloned().collect(),
        ..DietaryProfile::default()
    }
}

pub fn restaurant(id: &str, menu: Vec<MenuItem>) -> Restaurant {
    Restaurant {
        id: id.to_string(),
        name: id.to_string(),
        menu,
        ..Restaurant::default()
    }
}
