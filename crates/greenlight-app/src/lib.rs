//! Use case orchestration for greenlight.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod catalog;
mod check;
mod explain;
mod group;
mod render;
mod report;

pub use catalog::parse_catalog_json;
pub use check::{run_check, CheckInput, CheckOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use group::{run_group, GroupInput, GroupOutput};
pub use greenlight_types::TagMatching;
pub use render::render_markdown;
pub use report::{
    parse_report_json, runtime_error_report, serialize_report, to_renderable,
    to_renderable_group, ReportVariant,
};
