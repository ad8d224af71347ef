/// Sodium ceiling applied when a diner sets none (mg per meal).
pub const DEFAULT_MAX_SODIUM_MG: f64 = 600.0;

/// Sugar ceiling applied when a diner sets none (g per meal).
pub const DEFAULT_MAX_SUGAR_G: f64 = 25.0;

/// Above `limit * UNSAFE_LIMIT_MULTIPLIER` a nutrient is a violation, not a warning.
pub const UNSAFE_LIMIT_MULTIPLIER: f64 = 1.5;

/// A restaurant is `safe` when at least this share of its menu is safe.
pub const RESTAURANT_SAFE_PERCENT: u8 = 50;

/// Below the safe threshold, a restaurant is `caution` at or above this share
/// (or when any item is `caution`).
pub const RESTAURANT_CAUTION_PERCENT: u8 = 25;

/// Engine constants, passed to every evaluation instead of read from globals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SafetyLimits {
    pub default_max_sodium_mg: f64,
    pub default_max_sugar_g: f64,
    pub unsafe_multiplier: f64,
    pub restaurant_safe_percent: u8,
    pub restaurant_caution_percent: u8,
}

impl Default for SafetyLimits {
    fn default() -> Self {
        Self {
            default_max_sodium_mg: DEFAULT_MAX_SODIUM_MG,
            default_max_sugar_g: DEFAULT_MAX_SUGAR_G,
            unsafe_multiplier: UNSAFE_LIMIT_MULTIPLIER,
            restaurant_safe_percent: RESTAURANT_SAFE_PERCENT,
            restaurant_caution_percent: RESTAURANT_CAUTION_PERCENT,
        }
    }
}
