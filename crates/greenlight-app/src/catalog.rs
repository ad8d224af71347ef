use anyhow::Context;
use greenlight_domain::model::Catalog;

/// Parse a restaurant catalog (`{ "restaurants": [...] }`).
pub fn parse_catalog_json(text: &str) -> anyhow::Result<Catalog> {
    serde_json::from_str(text).context("parse catalog")
}

/// Parse the optional config text and resolve it; empty text means defaults.
pub(crate) fn load_config(
    config_text: &str,
    overrides: greenlight_settings::Overrides,
) -> anyhow::Result<greenlight_settings::ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        greenlight_settings::GreenlightConfigV1::default()
    } else {
        greenlight_settings::parse_config_toml(config_text).context("parse config")?
    };

    greenlight_settings::resolve_config(cfg, overrides).context("resolve config")
}
