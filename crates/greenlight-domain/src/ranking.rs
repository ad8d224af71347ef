//! Ordering and filtering helpers used when presenting results.

use crate::loose::{classify_level_only, has_restricted_tag};
use crate::model::{MenuItem, Restaurant};
use greenlight_types::{SafetyLevel, TagMatching};

/// Stable sort: safe first, then caution, then unsafe.
pub fn sort_by_safety<T, F>(entries: &mut [T], level_of: F)
where
    F: Fn(&T) -> SafetyLevel,
{
    entries.sort_by_key(|entry| level_of(entry));
}

/// Keep only entries at `level`. Returns how many were dropped.
pub fn retain_level<T, F>(entries: &mut Vec<T>, level: SafetyLevel, level_of: F) -> usize
where
    F: Fn(&T) -> SafetyLevel,
{
    let before = entries.len();
    entries.retain(|entry| level_of(entry) == level);
    before - entries.len()
}

/// A restaurant that has at least one item safe for the whole group.
#[derive(Clone, Debug)]
pub struct GroupRanking<'a> {
    pub restaurant: &'a Restaurant,
    pub safe_items: Vec<&'a MenuItem>,
}

/// Rank restaurants by how many items pass `matching` against every restriction.
///
/// Restaurants with no passing item are dropped. Ties keep catalog order.
pub fn rank_for_group<'a>(
    restaurants: &'a [Restaurant],
    restrictions: &[String],
    matching: TagMatching,
) -> Vec<GroupRanking<'a>> {
    let mut ranked: Vec<GroupRanking<'a>> = restaurants
        .iter()
        .map(|restaurant| GroupRanking {
            restaurant,
            safe_items: restaurant
                .menu
                .iter()
                .filter(|item| passes(item, restrictions, matching))
                .collect(),
        })
        .filter(|r| !r.safe_items.is_empty())
        .collect();

    ranked.sort_by(|a, b| b.safe_items.len().cmp(&a.safe_items.len()));
    ranked
}

fn passes(item: &MenuItem, restrictions: &[String], matching: TagMatching) -> bool {
    match matching {
        TagMatching::Exact => !has_restricted_tag(item, restrictions),
        TagMatching::Loose => classify_level_only(item, restrictions) == SafetyLevel::Safe,
    }
}
