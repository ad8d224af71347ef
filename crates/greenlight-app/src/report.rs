use anyhow::Context;
use greenlight_domain::model::Religious;
use greenlight_domain::profile_fingerprint;
use greenlight_render::{
    RenderableGroupMatch, RenderableGroupReport, RenderableItem, RenderableLevel,
    RenderableProfile, RenderableReason, RenderableReport, RenderableRestaurant,
    RenderableSummary,
};
use greenlight_settings::ResolvedConfig;
use greenlight_types::{
    ids, GroupReport, MenuReport, MenuReportData, ProfileSummary, Reason, ReasonKind,
    ReportEnvelope, TagMatching, ToolMeta, SCHEMA_GROUP_V1, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

#[derive(Clone, Debug)]
#[allow(clippy::large_enum_variant)]
pub enum ReportVariant {
    Menu(MenuReport),
    Group(GroupReport),
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportVariant> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    match schema.as_str() {
        SCHEMA_REPORT_V1 => {
            let report: MenuReport =
                serde_json::from_value(value).context("parse greenlight menu report")?;
            Ok(ReportVariant::Menu(report))
        }
        SCHEMA_GROUP_V1 => {
            let report: GroupReport =
                serde_json::from_value(value).context("parse greenlight group report")?;
            Ok(ReportVariant::Group(report))
        }
        _ => anyhow::bail!("unknown report schema: {schema}"),
    }
}

pub fn serialize_report(report: &ReportVariant) -> anyhow::Result<Vec<u8>> {
    match report {
        ReportVariant::Menu(r) => serde_json::to_vec_pretty(r).context("serialize menu report"),
        ReportVariant::Group(r) => serde_json::to_vec_pretty(r).context("serialize group report"),
    }
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "greenlight".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Summary of the merged profile, with effective limits filled in.
pub(crate) fn profile_summary(resolved: &ResolvedConfig) -> ProfileSummary {
    let profile = &resolved.profile;
    ProfileSummary {
        fingerprint: profile_fingerprint(profile, &resolved.limits),
        members: resolved.members(),
        allergens: profile.allergens.iter().map(|a| a.to_string()).collect(),
        dietary: profile.dietary.iter().map(|d| d.to_string()).collect(),
        religious: profile
            .religious
            .iter()
            .filter(|r| **r != Religious::None)
            .map(|r| r.to_string())
            .collect(),
        max_sodium_mg: profile.effective_max_sodium_mg(&resolved.limits),
        max_sugar_g: profile.effective_max_sugar_g(&resolved.limits),
    }
}

/// Report written when `check` fails before producing results.
pub fn runtime_error_report(message: &str) -> ReportVariant {
    let now = OffsetDateTime::now_utc();

    ReportVariant::Menu(ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        profile: ProfileSummary::default(),
        data: MenuReportData::default(),
        error: Some(Reason {
            kind: ReasonKind::Violation,
            rule_id: ids::RULE_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            data: serde_json::Value::Null,
        }),
    })
}

pub fn to_renderable(report: &MenuReport) -> RenderableReport {
    let p = &report.profile;
    let s = &report.data.summary;

    RenderableReport {
        profile: RenderableProfile {
            members: p.members,
            restrictions: p
                .allergens
                .iter()
                .chain(&p.dietary)
                .chain(&p.religious)
                .cloned()
                .collect(),
            max_sodium_mg: p.max_sodium_mg,
            max_sugar_g: p.max_sugar_g,
        },
        restaurants: report
            .data
            .restaurants
            .iter()
            .map(|r| RenderableRestaurant {
                name: r.name.clone(),
                cuisine: non_empty(&r.cuisine),
                level: RenderableLevel::from(r.rollup.level),
                safe_percent: r.rollup.safe_percent,
                safe_count: r.rollup.safe_count,
                total: r.rollup.total,
                items: r
                    .items
                    .iter()
                    .map(|i| RenderableItem {
                        name: i.name.clone(),
                        level: i.verdict.level.into(),
                        reasons: i
                            .verdict
                            .reasons
                            .iter()
                            .map(|reason| RenderableReason {
                                kind: reason.kind.into(),
                                message: reason.message.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect(),
        summary: RenderableSummary {
            restaurants_scanned: s.restaurants_scanned,
            items_scanned: s.items_scanned,
            restaurants_safe: s.restaurants_safe,
            restaurants_caution: s.restaurants_caution,
            restaurants_unsafe: s.restaurants_unsafe,
            restaurants_filtered: s.restaurants_filtered,
        },
        error: report.error.as_ref().map(|e| e.message.clone()),
    }
}

pub fn to_renderable_group(report: &GroupReport) -> RenderableGroupReport {
    RenderableGroupReport {
        restrictions: report.data.restrictions.clone(),
        loose: report.data.matching == TagMatching::Loose,
        restaurants_scanned: report.data.restaurants_scanned,
        matches: report
            .data
            .matches
            .iter()
            .map(|m| RenderableGroupMatch {
                name: m.name.clone(),
                cuisine: non_empty(&m.cuisine),
                safe_count: m.safe_count,
                total: m.total,
                safe_items: m.safe_item_ids.clone(),
            })
            .collect(),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
