//! YAML loaders for site tables and probe layouts.
//!
//! A site table lists every site of a map:
//!
//! ```yaml
//! sites:
//!   - id: fn101
//!     name: FN Site 101
//!     region: Primordia
//!     production_rank: C
//!     revenue_rank: E
//!     adjacent: [fn102, fn104]
//! ```
//!
//! A layout names the probes to install and the slots to lock:
//!
//! ```yaml
//! installs:
//!   - node: fn101
//!     probe_type: mining
//!     generation: 5
//! locked: [fn121]
//! ```

use std::path::Path;

use frontiernav_types::{NodeId, SiteRecord};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ConfigError;
use crate::error::EngineError;
use crate::network::ProbeNetwork;

#[derive(Debug, Deserialize)]
struct SiteTable {
    #[serde(default)]
    sites: Vec<SiteRecord>,
}

/// Load a site table from a YAML file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read, or
/// [`ConfigError::Yaml`] if it is not a valid site table.
pub fn load_site_table(path: &Path) -> Result<Vec<SiteRecord>, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let records = parse_site_table(&contents)?;
    info!(path = %path.display(), sites = records.len(), "Site table loaded");
    Ok(records)
}

/// Parse a site table from a YAML string.
///
/// # Errors
///
/// Returns [`ConfigError::Yaml`] if the string is not a valid site table.
pub fn parse_site_table(yaml: &str) -> Result<Vec<SiteRecord>, ConfigError> {
    let table: SiteTable = serde_yml::from_str(yaml)?;
    Ok(table.sites)
}

/// One probe installation in a [`ProbeLayout`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LayoutInstall {
    /// Site to install at.
    pub node: NodeId,
    /// Probe type tag (e.g. `"mining"`).
    pub probe_type: String,
    /// Generation, for types that have one.
    #[serde(default)]
    pub generation: Option<u8>,
}

/// A saved arrangement of probes over a map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProbeLayout {
    /// Installations, applied in order.
    #[serde(default)]
    pub installs: Vec<LayoutInstall>,
    /// Sites to lock, applied after every installation.
    #[serde(default)]
    pub locked: Vec<NodeId>,
}

impl ProbeLayout {
    /// Load a layout from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if it is not a valid layout.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse a layout from a YAML string. An empty string is an empty
    /// layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not a valid layout.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Install and lock everything this layout names.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownProbeType`] or
    /// [`EngineError::ProbeNotInCatalog`] for an unresolvable probe, and
    /// [`EngineError::Graph`] for an unknown site. Entries before the
    /// failing one stay applied.
    pub fn apply(&self, network: &mut ProbeNetwork) -> Result<(), EngineError> {
        for install in &self.installs {
            network.install_tag(&install.node, &install.probe_type, install.generation)?;
        }
        for node in &self.locked {
            network.lock(node)?;
        }
        debug!(
            installs = self.installs.len(),
            locked = self.locked.len(),
            "Probe layout applied"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use frontiernav_types::{ProductionRank, RevenueRank};

    use super::*;

    #[test]
    fn parse_site_table_with_defaults() {
        let yaml = r"
sites:
  - id: fn101
    name: FN Site 101
    production_rank: C
    revenue_rank: E
    adjacent: [fn102]
  - id: fn102
    name: FN Site 102
    region: Primordia
    production_rank: A
    revenue_rank: S
    sightseeing: [Millstone Ridge]
    rare_resources: [Aurorite, Infernium]
";
        let records = parse_site_table(yaml).unwrap();
        assert_eq!(records.len(), 2);

        let first = records.first();
        assert_eq!(first.map(|r| r.production_rank), Some(ProductionRank::C));
        assert_eq!(first.map(|r| r.region.as_str()), Some(""));
        assert_eq!(first.map(|r| r.adjacent.len()), Some(1));

        let second = records.get(1);
        assert_eq!(second.map(|r| r.revenue_rank), Some(RevenueRank::S));
        assert_eq!(second.map(|r| r.rare_resources.len()), Some(2));
    }

    #[test]
    fn parse_site_table_rejects_bad_rank() {
        let yaml = "sites:\n  - id: x\n    name: X\n    production_rank: Z\n    revenue_rank: S\n";
        assert!(matches!(parse_site_table(yaml), Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn parse_layout() {
        let yaml = r"
installs:
  - node: fn101
    probe_type: mining
    generation: 5
  - node: fn103
    probe_type: storage
locked: [fn121]
";
        let layout = ProbeLayout::parse(yaml).unwrap();
        assert_eq!(layout.installs.len(), 2);
        assert_eq!(layout.installs.first().and_then(|i| i.generation), Some(5));
        assert_eq!(layout.installs.get(1).and_then(|i| i.generation), None);
        assert_eq!(layout.locked, vec![NodeId::from("fn121")]);
    }

    #[test]
    fn empty_layout_is_valid() {
        assert_eq!(ProbeLayout::parse("  \n").ok(), Some(ProbeLayout::default()));
    }

    #[test]
    fn load_project_data_files() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
        let map = root.join("data").join("mira.yaml");
        if map.exists() {
            let records = load_site_table(&map);
            assert!(records.is_ok(), "Failed to load site table: {records:?}");
        }
        let layout = root.join("data").join("layout.yaml");
        if layout.exists() {
            let parsed = ProbeLayout::from_file(&layout);
            assert!(parsed.is_ok(), "Failed to load layout: {parsed:?}");
        }
    }
}
