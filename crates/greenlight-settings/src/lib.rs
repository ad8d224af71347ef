//! Config parsing and dining profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CompanionConfig, GreenlightConfigV1, PreferencesConfig, SCHEMA_CONFIG_V1};
pub use resolve::{parse_level, Companion, Overrides, ResolvedConfig};

/// Parse `greenlight.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<GreenlightConfigV1> {
    let cfg: GreenlightConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the profile the engine evaluates against (user preferences, companions, overrides).
pub fn resolve_config(
    cfg: GreenlightConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
