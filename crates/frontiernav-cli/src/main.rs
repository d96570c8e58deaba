//! Command-line front end for the FrontierNav probe network.
//!
//! Loads a site table and a probe layout, computes every slot's output
//! and the network totals, and prints the report as JSON on stdout.
//!
//! # Usage
//!
//! ```text
//! frontiernav [REGION]
//! ```
//!
//! With a region name, only that region's sites are listed; totals always
//! cover the whole network.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing, to stderr)
//! 2. Load configuration from `frontiernav-config.yaml`, or the path in
//!    `FRONTIERNAV_CONFIG`
//! 3. Load the site table and build the network
//! 4. Apply the probe layout, if one exists
//! 5. Compute and print the report

mod error;

use std::path::{Path, PathBuf};

use frontiernav_engine::{EngineConfig, ProbeLayout, ProbeNetwork, load_site_table};
use frontiernav_types::NetworkReport;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "FRONTIERNAV_CONFIG";

/// Config file used when `FRONTIERNAV_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "frontiernav-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if loading, calculation or serialization fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("frontiernav starting");

    let region = std::env::args().nth(1);
    let json = run(region.as_deref())?;
    println!("{json}");
    Ok(())
}

/// Load everything, compute the report and render it as JSON.
fn run(region: Option<&str>) -> Result<String, CliError> {
    let config = load_config()?;
    info!(
        policy = ?config.booster.policy,
        initial_slot = ?config.slots.initial,
        starting_storage = config.storage.starting_capacity,
        map = %config.data.map_path.display(),
        "Configuration loaded"
    );

    let map_path = &config.data.map_path;
    if !map_path.exists() {
        return Err(CliError::MissingSiteTable {
            path: map_path.display().to_string(),
        });
    }
    let records = load_site_table(map_path)?;
    let mut network = ProbeNetwork::from_records(records, &config)?;

    let layout = load_layout(&config.data.layout_path)?;
    layout.apply(&mut network)?;
    info!(
        installs = layout.installs.len(),
        locked = layout.locked.len(),
        "Layout applied"
    );

    let mut report = network.compute_report()?;
    if let Some(region) = region {
        report.nodes.retain(|entry| entry.region == region);
        info!(region, sites = report.nodes.len(), "Report filtered by region");
    }
    render(&report)
}

/// Pretty-printed JSON for a report.
fn render(report: &NetworkReport) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config() -> Result<EngineConfig, CliError> {
    let config_path = std::env::var(CONFIG_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if config_path.exists() {
        Ok(EngineConfig::from_file(&config_path)?)
    } else {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        Ok(EngineConfig::default())
    }
}

/// Load the probe layout, or an empty one when the file is absent.
fn load_layout(path: &Path) -> Result<ProbeLayout, CliError> {
    if path.exists() {
        Ok(ProbeLayout::from_file(path)?)
    } else {
        info!(path = %path.display(), "Layout file not found, every slot keeps its initial probe");
        Ok(ProbeLayout::default())
    }
}
