//! Tag matching for group-only scenarios, where a group is known only by flat
//! restriction strings and no full preference record is available.
//!
//! Two matchers live here:
//! - `classify_level_only`: substring containment in both directions. It can
//!   over-report and never yields `caution`.
//! - `has_restricted_tag`: exact case-insensitive equality between a tag and a
//!   restriction. Group ranking uses this one, so a `Dairy-Free` label does not
//!   count against a dairy restriction.

use crate::model::{DietaryProfile, MenuItem, Religious};
use greenlight_types::SafetyLevel;

/// Lowercased restriction strings of a profile: allergens, then dietary, then
/// religious (customs included). The `none` sentinel is left out.
pub fn restriction_strings(profile: &DietaryProfile) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    let all = profile
        .allergens
        .iter()
        .map(|a| a.as_str())
        .chain(profile.dietary.iter().map(|d| d.as_str()))
        .chain(
            profile
                .religious
                .iter()
                .filter(|r| **r != Religious::None)
                .map(|r| r.as_str()),
        );

    for restriction in all {
        let lowered = restriction.to_lowercase();
        if !out.contains(&lowered) {
            out.push(lowered);
        }
    }
    out
}

/// `unsafe` if any item tag contains, or is contained in, any restriction.
pub fn classify_level_only(item: &MenuItem, restrictions: &[String]) -> SafetyLevel {
    if has_tag_violation(item, restrictions) {
        SafetyLevel::Unsafe
    } else {
        SafetyLevel::Safe
    }
}

pub fn has_tag_violation(item: &MenuItem, restrictions: &[String]) -> bool {
    let tags: Vec<String> = item.tags.iter().map(|t| t.to_lowercase()).collect();

    restrictions.iter().any(|restriction| {
        let restriction = restriction.to_lowercase();
        tags.iter()
            .any(|tag| tag.contains(restriction.as_str()) || restriction.contains(tag.as_str()))
    })
}

/// `true` if any item tag equals any restriction, ignoring case.
pub fn has_restricted_tag(item: &MenuItem, restrictions: &[String]) -> bool {
    item.tags.iter().any(|tag| {
        let tag = tag.to_lowercase();
        restrictions.iter().any(|r| r.to_lowercase() == tag)
    })
}
