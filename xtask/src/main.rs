//! Developer tasks (schema generation, schema drift checks, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaTarget {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(greenlight_types::MenuReport)
}

fn generate_group_schema() -> schemars::Schema {
    schema_for!(greenlight_types::GroupReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(greenlight_settings::GreenlightConfigV1)
}

fn schema_targets() -> Vec<SchemaTarget> {
    vec![
        SchemaTarget {
            filename: "greenlight.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaTarget {
            filename: "greenlight.group.v1.json",
            generate: generate_group_schema,
        },
        SchemaTarget {
            filename: "greenlight.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for target in schema_targets() {
        let json = serialize_schema(&(target.generate)())?;
        let path = dir.join(target.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for target in schema_targets() {
        let path = dir.join(target.filename);
        if !path.exists() {
            missing.push(target.filename);
            continue;
        }

        let expected = serialize_schema(&(target.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(target.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Every fixture `greenlight.toml` must parse and match the config schema.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_config_schema())
        .context("Failed to convert config schema to JSON")?;
    let compiled = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile config schema: {}", e))?;
    println!("✓ greenlight.config.v1 schema compiles");

    let dir = fixtures_dir();
    if !dir.exists() {
        bail!("tests/fixtures/ not found at {}", dir.display());
    }

    let mut checked = 0;
    let mut errors = Vec::new();

    for entry in fs::read_dir(&dir).context("Failed to read tests/fixtures/")? {
        let fixture_dir = entry?.path();
        let config_path = fixture_dir.join("greenlight.toml");
        if !config_path.exists() {
            continue;
        }
        let name = fixture_name(&fixture_dir);

        let text = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = match greenlight_settings::parse_config_toml(&text) {
            Ok(config) => config,
            Err(err) => {
                errors.push(format!("fixture '{}': {:#}", name, err));
                continue;
            }
        };
        let value = serde_json::to_value(&config)
            .with_context(|| format!("Failed to convert config for fixture '{}'", name))?;

        for err in compiled.iter_errors(&value) {
            errors.push(format!("fixture '{}': schema validation: {}", name, err));
        }
        checked += 1;
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("✓ {} fixture configs match the config schema", checked);
    Ok(())
}

fn fixture_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Validate that all rule IDs and codes have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let rule_ids = greenlight_types::explain::all_rule_ids();
    let codes = greenlight_types::explain::all_codes();

    let mut errors = Vec::new();
    for (kind, ids) in [("Rule ID", rule_ids), ("Code", codes)] {
        for id in ids {
            match greenlight_types::explain::lookup_explanation(id) {
                Some(exp) => {
                    if exp.title.is_empty() {
                        errors.push(format!("{} '{}' has empty title", kind, id));
                    }
                    if exp.description.is_empty() {
                        errors.push(format!("{} '{}' has empty description", kind, id));
                    }
                    if exp.remediation.is_empty() {
                        errors.push(format!("{} '{}' has empty remediation", kind, id));
                    }
                }
                None => errors.push(format!("{} '{}' has no explanation", kind, id)),
            }
        }
    }

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        );
    }

    println!("✓ {} rule IDs have explanations", rule_ids.len());
    println!("✓ {} codes have explanations", codes.len());
    println!("\n✓ All explain coverage checks passed!");
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate fixture configs against greenlight.config.v1");
    eprintln!("  explain-coverage  Validate all rule IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for target in schema_targets() {
                println!("{}", target.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
