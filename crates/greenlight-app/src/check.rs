//! The `check` use case: classify every menu item and produce a report.

use greenlight_domain::evaluate_menu;
use greenlight_domain::model::Restaurant;
use greenlight_domain::ranking::{retain_level, sort_by_safety};
use greenlight_settings::{Overrides, ResolvedConfig};
use greenlight_types::{
    ItemReport, MenuReport, MenuReportData, MenuSummary, ReportEnvelope, RestaurantReport,
    SafetyLevel, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::catalog::{load_config, parse_catalog_json};
use crate::report::{profile_summary, tool_meta};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Catalog JSON contents.
    pub catalog_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Only evaluate this restaurant id.
    pub restaurant: Option<&'a str>,
    /// Only report restaurants whose rollup has this level.
    pub level: Option<SafetyLevel>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: MenuReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config and catalog, classify every item, roll up restaurants.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = load_config(input.config_text, input.overrides.clone())?;
    let catalog = parse_catalog_json(input.catalog_text)?;

    let selected: Vec<&Restaurant> = match input.restaurant {
        Some(id) => {
            let found: Vec<&Restaurant> =
                catalog.restaurants.iter().filter(|r| r.id == id).collect();
            if found.is_empty() {
                anyhow::bail!("unknown restaurant: {id}");
            }
            found
        }
        None => catalog.restaurants.iter().collect(),
    };

    debug!(
        members = resolved.members(),
        restaurants = selected.len(),
        "evaluating catalog"
    );

    let mut summary = MenuSummary::default();
    let mut restaurants: Vec<RestaurantReport> = Vec::with_capacity(selected.len());

    for restaurant in selected {
        let report = evaluate_restaurant(restaurant, &resolved);

        summary.restaurants_scanned += 1;
        summary.items_scanned += report.rollup.total;
        match report.rollup.level {
            SafetyLevel::Safe => summary.restaurants_safe += 1,
            SafetyLevel::Caution => summary.restaurants_caution += 1,
            SafetyLevel::Unsafe => summary.restaurants_unsafe += 1,
        }

        debug!(
            restaurant = %report.id,
            level = %report.rollup.level,
            safe_percent = report.rollup.safe_percent,
            items = report.rollup.total,
            "evaluated restaurant"
        );
        restaurants.push(report);
    }

    if let Some(level) = input.level {
        let dropped = retain_level(&mut restaurants, level, |r| r.rollup.level);
        summary.restaurants_filtered = dropped as u32;
    }

    info!(
        restaurants = summary.restaurants_scanned,
        items = summary.items_scanned,
        safe = summary.restaurants_safe,
        caution = summary.restaurants_caution,
        unsafe_ = summary.restaurants_unsafe,
        "check complete"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        profile: profile_summary(&resolved),
        data: MenuReportData {
            restaurants,
            summary,
        },
        error: None,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

fn evaluate_restaurant(restaurant: &Restaurant, resolved: &ResolvedConfig) -> RestaurantReport {
    let evaluation = evaluate_menu(&restaurant.menu, &resolved.profile, &resolved.limits);

    let mut items: Vec<ItemReport> = restaurant
        .menu
        .iter()
        .zip(evaluation.verdicts)
        .map(|(item, verdict)| ItemReport {
            id: item.id.clone(),
            name: item.name.clone(),
            verdict,
        })
        .collect();
    sort_by_safety(&mut items, |i| i.verdict.level);

    RestaurantReport {
        id: restaurant.id.clone(),
        name: restaurant.name.clone(),
        cuisine: restaurant.cuisine.clone(),
        rollup: evaluation.rollup,
        items,
    }
}
