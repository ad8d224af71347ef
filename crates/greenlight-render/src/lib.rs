//! Rendering utilities for human-facing surfaces (Markdown summaries).

#![forbid(unsafe_code)]

mod markdown;
mod model;

pub use markdown::{render_group_markdown, render_markdown};
pub use model::{
    RenderableGroupMatch, RenderableGroupReport, RenderableItem, RenderableLevel,
    RenderableProfile, RenderableReason, RenderableReasonKind, RenderableReport,
    RenderableRestaurant, RenderableSummary,
};
