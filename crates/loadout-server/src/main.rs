//! Advisor API server entry point.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load tuning from `ADVISOR_CONFIG` (optional)
//! 3. Validate the bundled catalog
//! 4. Build the advisor and serve until `Ctrl-C`
//!
//! `LOG_FORMAT=json` switches log lines to JSON.

use std::path::Path;
use std::sync::Arc;

use loadout_advisor::{Advisor, AdvisorConfig};
use loadout_catalog::Catalog;
use loadout_server::{AppState, ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, catalog validation, binding, or
/// serving fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("loadout-server starting");

    let config = match std::env::var("ADVISOR_CONFIG") {
        Ok(path) => {
            let config = AdvisorConfig::from_file(Path::new(&path))?;
            info!(path, "advisor config loaded");
            config
        }
        Err(_) => AdvisorConfig::default(),
    };

    let catalog = Catalog::validated_builtin()?;
    info!(
        weapons = catalog.weapons().len(),
        families = catalog.families().len(),
        "catalog validated"
    );

    let advisor = Advisor::new(catalog, config);
    let state = Arc::new(AppState::new(advisor));
    let server_config = ServerConfig::from_env()?;
    start_server(&server_config, state).await?;

    Ok(())
}
