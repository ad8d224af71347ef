//! Stable DTOs and IDs used across the greenlight workspace.
//!
//! This crate is intentionally boring:
//! - safety levels, verdicts and rollups emitted by the engine
//! - the JSON report envelopes
//! - stable string IDs and codes for every rule
//! - explain registry for rule guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{lookup_explanation, ExamplePair, Explanation, Outcome};
pub use receipt::{
    GroupMatch, GroupReport, GroupReportData, ItemReport, MenuReport, MenuReportData,
    MenuSummary, NutrientExcess, ProfileSummary, Reason, ReasonKind, ReportEnvelope,
    RestaurantReport, RestaurantRollup, SafetyLevel, SafetyVerdict, TagMatching, ToolMeta,
    SCHEMA_GROUP_V1, SCHEMA_REPORT_V1,
};
