//! The `group` use case: rank restaurants by items every diner can order.
//!
//! Restrictions are flattened to lowercase strings and compared against item
//! tags, by exact equality unless loose matching is requested.

use greenlight_domain::ranking::rank_for_group;
use greenlight_domain::restriction_strings;
use greenlight_settings::{Overrides, ResolvedConfig};
use greenlight_types::{
    GroupMatch, GroupReport, GroupReportData, ReportEnvelope, TagMatching, SCHEMA_GROUP_V1,
};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::catalog::{load_config, parse_catalog_json};
use crate::report::{profile_summary, tool_meta};

#[derive(Clone, Debug)]
pub struct GroupInput<'a> {
    pub catalog_text: &'a str,
    pub config_text: &'a str,
    pub overrides: Overrides,
    pub matching: TagMatching,
}

#[derive(Clone, Debug)]
pub struct GroupOutput {
    pub report: GroupReport,
    pub resolved_config: ResolvedConfig,
}

pub fn run_group(input: GroupInput<'_>) -> anyhow::Result<GroupOutput> {
    let started_at = OffsetDateTime::now_utc();

    let resolved = load_config(input.config_text, input.overrides.clone())?;
    let catalog = parse_catalog_json(input.catalog_text)?;

    let restrictions = restriction_strings(&resolved.profile);
    debug!(
        restrictions = ?restrictions,
        matching = ?input.matching,
        "ranking restaurants for group"
    );

    let ranked = rank_for_group(&catalog.restaurants, &restrictions, input.matching);
    let matches: Vec<GroupMatch> = ranked
        .into_iter()
        .map(|ranked| GroupMatch {
            id: ranked.restaurant.id.clone(),
            name: ranked.restaurant.name.clone(),
            cuisine: ranked.restaurant.cuisine.clone(),
            safe_count: ranked.safe_items.len() as u32,
            total: ranked.restaurant.menu.len() as u32,
            safe_item_ids: ranked.safe_items.iter().map(|i| i.id.clone()).collect(),
        })
        .collect();

    info!(
        restaurants = catalog.restaurants.len(),
        matches = matches.len(),
        "group ranking complete"
    );

    let report = ReportEnvelope {
        schema: SCHEMA_GROUP_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        profile: profile_summary(&resolved),
        data: GroupReportData {
            restrictions,
            matching: input.matching,
            restaurants_scanned: catalog.restaurants.len() as u32,
            matches,
        },
        error: None,
    };

    Ok(GroupOutput {
        report,
        resolved_config: resolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
  "restaurants": [
    {
      "id": "cafe",
      "name": "Cafe",
      "menu": [
        { "id": "toast", "name": "Toast", "tags": ["Gluten"] },
        { "id": "fruit", "name": "Fruit Cup", "tags": ["Vegan"] }
      ]
    },
    {
      "id": "thai",
      "name": "Thai Place",
      "cuisine": "Thai",
      "menu": [
        { "id": "satay", "name": "Satay", "tags": ["Peanuts"] },
        { "id": "rice", "name": "Rice", "tags": [] },
        { "id": "curry", "name": "Green Curry", "tags": ["GF"] },
        { "id": "noodles", "name": "Rice Noodles", "tags": ["Gluten-Free"] }
      ]
    },
    {
      "id": "nuts",
      "name": "Nut Bar",
      "menu": [
        { "id": "mix", "name": "Nut Mix", "tags": ["peanuts", "gluten"] }
      ]
    }
  ]
}"#;

    const CONFIG: &str = r#"
[preferences]
allergens = ["gluten"]

[[companions]]
name = "Sam"
restrictions = ["peanuts"]
"#;

    #[test]
    fn ranks_by_safe_count_and_drops_empty() {
        let output = run_group(GroupInput {
            catalog_text: CATALOG,
            config_text: CONFIG,
            overrides: Overrides::default(),
            matching: TagMatching::Exact,
        })
        .expect("run_group");

        let data = &output.report.data;
        assert_eq!(data.restrictions, vec!["gluten", "peanuts"]);
        assert_eq!(data.restaurants_scanned, 3);

        let ids: Vec<&str> = data.matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["thai", "cafe"]);
        assert_eq!(data.matches[0].safe_item_ids, vec!["rice", "curry", "noodles"]);
        assert_eq!(data.matches[0].total, 4);
        assert_eq!(data.matches[1].safe_item_ids, vec!["fruit"]);
        assert_eq!(data.matching, TagMatching::Exact);
        assert_eq!(output.report.profile.members, 2);
        assert_eq!(output.report.schema, SCHEMA_GROUP_V1);
    }

    #[test]
    fn solo_drops_companion_restrictions() {
        let output = run_group(GroupInput {
            catalog_text: CATALOG,
            config_text: CONFIG,
            overrides: Overrides {
                solo: true,
                ..Overrides::default()
            },
            matching: TagMatching::Exact,
        })
        .expect("run_group");

        let data = &output.report.data;
        assert_eq!(data.restrictions, vec!["gluten"]);
        assert_eq!(data.matches[0].id, "thai");
        assert_eq!(data.matches[0].safe_count, 4);
    }

    #[test]
    fn loose_matching_counts_free_from_labels_against_the_group() {
        let output = run_group(GroupInput {
            catalog_text: CATALOG,
            config_text: CONFIG,
            overrides: Overrides::default(),
            matching: TagMatching::Loose,
        })
        .expect("run_group");

        let data = &output.report.data;
        assert_eq!(data.matching, TagMatching::Loose);
        assert_eq!(data.matches[0].id, "thai");
        assert_eq!(data.matches[0].safe_item_ids, vec!["rice", "curry"]);
    }
}
