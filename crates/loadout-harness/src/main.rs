//! Golden scenario runner for the loadout advisor.
//!
//! Runs the scenario matrix against the bundled catalog and prints either a
//! terminal report or a JSON document.
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | every selected case passed |
//! | 1 | at least one case failed |
//! | 2 | `--scenario` named an unknown case |
//!
//! # Environment
//!
//! - `ADVISOR_CONFIG` -- optional path to a tuning YAML file.
//! - `RUST_LOG` -- log filter (default `info`). Logs go to stderr.
//! - `LOG_FORMAT=json` -- structured JSON log lines.

mod cases;
mod checks;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use loadout_advisor::{Advisor, AdvisorConfig};
use loadout_catalog::Catalog;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cases::{find_case, golden_cases};
use crate::checks::{format_human, run_case};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "loadout-harness")]
#[command(about = "Validate the loadout advisor against the golden scenario matrix", long_about = None)]
struct Cli {
    /// Print outcomes as JSON instead of a text report.
    #[arg(long)]
    json: bool,

    /// Run a single scenario by id (for example `S06`).
    #[arg(long, value_name = "ID")]
    scenario: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_config() -> anyhow::Result<AdvisorConfig> {
    match std::env::var_os("ADVISOR_CONFIG") {
        Some(path) => {
            let path = PathBuf::from(path);
            let config = AdvisorConfig::from_file(&path)
                .with_context(|| format!("loading advisor config from {}", path.display()))?;
            info!(path = %path.display(), "advisor config loaded");
            Ok(config)
        }
        None => Ok(AdvisorConfig::default()),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config()?;
    let catalog = Catalog::validated_builtin().context("bundled catalog failed validation")?;
    let advisor = Advisor::new(catalog, config);

    let selected = match cli.scenario.as_deref() {
        Some(id) => match find_case(id) {
            Some(case) => vec![case],
            None => {
                eprintln!("No scenario found for \"{id}\"");
                return Ok(ExitCode::from(2));
            }
        },
        None => golden_cases(),
    };
    info!(cases = selected.len(), "running advisor matrix");

    let outcomes: Vec<_> = selected
        .iter()
        .map(|case| run_case(&advisor, case))
        .collect();
    let failed = outcomes.iter().filter(|outcome| !outcome.passed).count();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        println!("{}", format_human(&outcomes));
    }

    if failed > 0 {
        warn!(failed, "advisor matrix has failures");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
