//! Pure safety evaluation (no IO).
//!
//! Input: menu items and a merged dietary profile constructed elsewhere.
//! Output: per-item verdicts with reasons, and per-restaurant rollups.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod rollup;

pub mod checks;
mod engine;
mod fingerprint;
pub mod loose;
mod merge;
pub mod ranking;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{aggregate, classify, classify_level, evaluate_menu, MenuEvaluation};
pub use fingerprint::profile_fingerprint;
pub use loose::{classify_level_only, restriction_strings};
pub use merge::merge;
