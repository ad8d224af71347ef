use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifiers for greenlight reports.
pub const SCHEMA_REPORT_V1: &str = "greenlight.report.v1";
pub const SCHEMA_GROUP_V1: &str = "greenlight.group.v1";

/// Three-tier safety verdict. Declaration order is severity order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Safe,
    Caution,
    Unsafe,
}

impl SafetyLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            SafetyLevel::Safe => "safe",
            SafetyLevel::Caution => "caution",
            SafetyLevel::Unsafe => "unsafe",
        }
    }
}

impl std::fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a reason line affects the verdict.
///
/// - `violation` forces `unsafe`
/// - `warning` forces at least `caution`
/// - `confirmation` records a passed check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReasonKind {
    Violation,
    Warning,
    Confirmation,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Reason {
    pub kind: ReasonKind,
    pub rule_id: String,
    pub code: String,
    pub message: String,

    /// Rule-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

/// Amount by which an item exceeds the diner's nutrient limits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NutrientExcess {
    pub sodium_mg: f64,
    pub sugar_g: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SafetyVerdict {
    pub level: SafetyLevel,
    pub reasons: Vec<Reason>,

    /// Present when sodium or sugar is above its limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exceeds_by: Option<NutrientExcess>,
}

/// Aggregate safety of one restaurant's menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RestaurantRollup {
    pub safe_percent: u8,
    pub level: SafetyLevel,
    pub safe_count: u32,
    pub caution_count: u32,
    pub unsafe_count: u32,
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The merged profile a report was computed against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ProfileSummary {
    /// Stable hash of the merged profile; equal profiles share a fingerprint.
    pub fingerprint: String,
    /// Diners merged into the profile (the user plus companions).
    pub members: u32,
    pub allergens: Vec<String>,
    pub dietary: Vec<String>,
    pub religious: Vec<String>,
    pub max_sodium_mg: f64,
    pub max_sugar_g: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItemReport {
    pub id: String,
    pub name: String,
    pub verdict: SafetyVerdict,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RestaurantReport {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cuisine: String,
    pub rollup: RestaurantRollup,
    /// Items ordered safe first, then caution, then unsafe.
    pub items: Vec<ItemReport>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct MenuSummary {
    pub restaurants_scanned: u32,
    pub items_scanned: u32,
    pub restaurants_safe: u32,
    pub restaurants_caution: u32,
    pub restaurants_unsafe: u32,
    /// Restaurants left out by a level filter.
    #[serde(default)]
    pub restaurants_filtered: u32,
}

/// Greenlight-specific payload for `check` reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct MenuReportData {
    pub restaurants: Vec<RestaurantReport>,
    pub summary: MenuSummary,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupMatch {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cuisine: String,
    pub safe_count: u32,
    pub total: u32,
    pub safe_item_ids: Vec<String>,
}

/// How item tags are compared with group restrictions.
///
/// - `exact`: a tag equal to a restriction (ignoring case) rules the item out
/// - `loose`: substring containment in either direction; over-reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TagMatching {
    #[default]
    Exact,
    Loose,
}

/// Greenlight-specific payload for `group` reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct GroupReportData {
    /// Lowercased restriction strings matched against item tags.
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub matching: TagMatching,
    pub restaurants_scanned: u32,
    pub matches: Vec<GroupMatch>,
}

/// A generic report envelope.
///
/// Keeping this generic lets `check` and `group` share a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = MenuReportData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub profile: ProfileSummary,
    pub data: TData,

    /// Set when the run failed before producing data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Reason>,
}

pub type MenuReport = ReportEnvelope<MenuReportData>;
pub type GroupReport = ReportEnvelope<GroupReportData>;
