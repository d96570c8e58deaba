//! Probe output engine for the FrontierNav probe network.
//!
//! Given a [`SiteGraph`] with a probe in every slot, this crate computes
//! what each slot yields and what the whole network yields.
//!
//! # Modules
//!
//! - [`catalog`] -- Installable probes with their generations and costs.
//! - [`config`] -- YAML configuration and environment overrides.
//! - [`error`] -- Error types for probe resolution and calculation.
//! - [`links`] -- Link groups of identical probes.
//! - [`loader`] -- Site table and probe layout loaders.
//! - [`network`] -- [`ProbeNetwork`], the graph plus catalog facade.
//! - [`output`] -- Per-slot output calculation.
//! - [`rates`] -- Rate tables and multiplier curves.
//! - [`totals`] -- Network-wide aggregation.
//!
//! [`SiteGraph`]: frontiernav_graph::SiteGraph

pub mod catalog;
pub mod config;
pub mod error;
pub mod links;
pub mod loader;
pub mod network;
pub mod output;
pub mod rates;
pub mod totals;

// Re-export primary types at crate root.
pub use catalog::ProbeCatalog;
pub use config::{BoosterPolicy, ConfigError, EngineConfig, InitialSlot};
pub use error::EngineError;
pub use loader::{LayoutInstall, ProbeLayout, load_site_table, parse_site_table};
pub use network::ProbeNetwork;
pub use output::{OutputEngine, RawOutput};
pub use totals::{compute_report, compute_totals};
