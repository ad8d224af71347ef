use greenlight_types::{ReasonKind, SafetyLevel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableLevel {
    Safe,
    Caution,
    Unsafe,
}

impl From<SafetyLevel> for RenderableLevel {
    fn from(level: SafetyLevel) -> Self {
        match level {
            SafetyLevel::Safe => RenderableLevel::Safe,
            SafetyLevel::Caution => RenderableLevel::Caution,
            SafetyLevel::Unsafe => RenderableLevel::Unsafe,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableReasonKind {
    Violation,
    Warning,
    Confirmation,
}

impl From<ReasonKind> for RenderableReasonKind {
    fn from(kind: ReasonKind) -> Self {
        match kind {
            ReasonKind::Violation => RenderableReasonKind::Violation,
            ReasonKind::Warning => RenderableReasonKind::Warning,
            ReasonKind::Confirmation => RenderableReasonKind::Confirmation,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReason {
    pub kind: RenderableReasonKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableItem {
    pub name: String,
    pub level: RenderableLevel,
    pub reasons: Vec<RenderableReason>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRestaurant {
    pub name: String,
    pub cuisine: Option<String>,
    pub level: RenderableLevel,
    pub safe_percent: u8,
    pub safe_count: u32,
    pub total: u32,
    pub items: Vec<RenderableItem>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableProfile {
    pub members: u32,
    pub restrictions: Vec<String>,
    pub max_sodium_mg: f64,
    pub max_sugar_g: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSummary {
    pub restaurants_scanned: u32,
    pub items_scanned: u32,
    pub restaurants_safe: u32,
    pub restaurants_caution: u32,
    pub restaurants_unsafe: u32,
    pub restaurants_filtered: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub profile: RenderableProfile,
    pub restaurants: Vec<RenderableRestaurant>,
    pub summary: RenderableSummary,
    /// Set when the run failed; rendered instead of the restaurant list.
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableGroupMatch {
    pub name: String,
    pub cuisine: Option<String>,
    pub safe_count: u32,
    pub total: u32,
    /// Ids of the items every diner can order.
    pub safe_items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableGroupReport {
    pub restrictions: Vec<String>,
    /// Tags were matched by substring rather than exact equality.
    pub loose: bool,
    pub restaurants_scanned: u32,
    pub matches: Vec<RenderableGroupMatch>,
}
