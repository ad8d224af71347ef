//! CLI entry point for greenlight.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `greenlight-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use greenlight_app::{
    format_explanation, format_not_found, parse_report_json, render_markdown, run_check,
    run_explain, run_group, runtime_error_report, serialize_report, CheckInput, ExplainOutput,
    GroupInput, ReportVariant, TagMatching,
};
use greenlight_settings::{parse_level, Overrides};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "greenlight",
    version,
    about = "Menu safety checks against dietary, allergen, and religious restrictions"
)]
struct Cli {
    /// Path to greenlight config TOML (missing file means defaults).
    #[arg(long, global = true, default_value = "greenlight.toml")]
    config: Utf8PathBuf,

    /// Log debug details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Override the per-meal sodium limit in mg.
    #[arg(long, global = true)]
    max_sodium: Option<f64>,

    /// Override the per-meal sugar limit in g.
    #[arg(long, global = true)]
    max_sugar: Option<f64>,

    /// Ignore companions from the config and evaluate for yourself only.
    #[arg(long, global = true)]
    solo: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify every menu item in a catalog and write a report.
    Check {
        /// Path to the restaurant catalog JSON.
        #[arg(long)]
        catalog: Utf8PathBuf,

        /// Only evaluate the restaurant with this id.
        #[arg(long)]
        restaurant: Option<String>,

        /// Only report restaurants rated at this level (safe|caution|unsafe).
        #[arg(long)]
        level: Option<String>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/greenlight/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/greenlight/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Rank restaurants by items safe for the whole dining group.
    Group {
        /// Path to the restaurant catalog JSON.
        #[arg(long)]
        catalog: Utf8PathBuf,

        /// Where to write the JSON group report.
        #[arg(long, default_value = "artifacts/greenlight/group.json")]
        report_out: Utf8PathBuf,

        /// Match tags by substring instead of exact equality (over-reports).
        #[arg(long)]
        loose: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/greenlight/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a rule_id or code.
    Explain {
        /// The rule_id (e.g., "nutrition.sodium") or code (e.g., "sodium_high") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref catalog,
            ref restaurant,
            ref level,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            catalog,
            restaurant.as_deref(),
            level.as_deref(),
            report_out,
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Group {
            ref catalog,
            ref report_out,
            loose,
        } => {
            let matching = if loose {
                TagMatching::Loose
            } else {
                TagMatching::Exact
            };
            cmd_group(&cli, catalog, report_out, matching)
        }
        Commands::Md {
            ref report,
            ref output,
        } => cmd_md(report, output.as_deref()),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the default is warn.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        max_sodium_mg: cli.max_sodium,
        max_sugar_g: cli.max_sugar,
        solo: cli.solo,
    }
}

/// Missing config is allowed (defaults apply); any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "config not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_check(
    cli: &Cli,
    catalog: &Utf8Path,
    restaurant: Option<&str>,
    level: Option<&str>,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<()> {
        let level = level.map(parse_level).transpose()?;
        let cfg_text = read_config(&cli.config)?;
        let catalog_text = std::fs::read_to_string(catalog)
            .with_context(|| format!("read catalog: {}", catalog))?;

        let output = run_check(CheckInput {
            catalog_text: &catalog_text,
            config_text: &cfg_text,
            overrides: overrides(cli),
            restaurant,
            level,
        })?;

        let report = ReportVariant::Menu(output.report);
        write_report_file(report_out, &report).context("write report json")?;

        if let Some(markdown_out) = markdown_out {
            let md = render_markdown(&report);
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(())
    })();

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("greenlight error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_group(
    cli: &Cli,
    catalog: &Utf8Path,
    report_out: &Utf8Path,
    matching: TagMatching,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<()> {
        let cfg_text = read_config(&cli.config)?;
        let catalog_text = std::fs::read_to_string(catalog)
            .with_context(|| format!("read catalog: {}", catalog))?;

        let output = run_group(GroupInput {
            catalog_text: &catalog_text,
            config_text: &cfg_text,
            overrides: overrides(cli),
            matching,
        })?;

        write_report_file(report_out, &ReportVariant::Group(output.report))
            .context("write report json")
    })();

    if let Err(err) = result {
        eprintln!("greenlight error: {err:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &ReportVariant) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_rule_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
