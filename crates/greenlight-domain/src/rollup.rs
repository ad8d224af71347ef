use crate::policy::SafetyLimits;
use greenlight_types::{RestaurantRollup, SafetyLevel};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub safe: u32,
    pub caution: u32,
    pub unsafe_: u32,
}

impl LevelCounts {
    pub fn from_levels<I>(levels: I) -> Self
    where
        I: IntoIterator<Item = SafetyLevel>,
    {
        let mut counts = LevelCounts::default();
        for level in levels {
            match level {
                SafetyLevel::Safe => counts.safe += 1,
                SafetyLevel::Caution => counts.caution += 1,
                SafetyLevel::Unsafe => counts.unsafe_ += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.safe + self.caution + self.unsafe_
    }
}

/// Share of safe items, rounded to the nearest integer; `0` for an empty menu.
pub fn safe_percent(counts: &LevelCounts) -> u8 {
    let total = counts.total();
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(counts.safe) / f64::from(total);
    (ratio * 100.0).round() as u8
}

pub fn rollup_from_counts(counts: LevelCounts, limits: &SafetyLimits) -> RestaurantRollup {
    let percent = safe_percent(&counts);

    let level = if percent >= limits.restaurant_safe_percent {
        SafetyLevel::Safe
    } else if percent >= limits.restaurant_caution_percent || counts.caution > 0 {
        SafetyLevel::Caution
    } else {
        SafetyLevel::Unsafe
    };

    RestaurantRollup {
        safe_percent: percent,
        level,
        safe_count: counts.safe,
        caution_count: counts.caution,
        unsafe_count: counts.unsafe_,
        total: counts.total(),
    }
}
