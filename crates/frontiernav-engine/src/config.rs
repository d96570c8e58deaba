//! Configuration loading and typed config structures for the probe network.
//!
//! The canonical configuration lives in `frontiernav-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror the
//! YAML structure, and provides a loader that reads it. Every field has a
//! default, so an empty file is a valid configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

/// Environment variable overriding `booster.policy`.
pub const BOOSTER_POLICY_ENV: &str = "FRONTIERNAV_BOOSTER_POLICY";

/// Errors that can occur when loading configuration or data files.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
///
/// Mirrors the structure of `frontiernav-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Initial slot state.
    #[serde(default)]
    pub slots: SlotsConfig,

    /// Booster bonus policy.
    #[serde(default)]
    pub booster: BoosterConfig,

    /// Storage accounting.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Probe catalog: generations and installation costs per probe type.
    #[serde(default = "default_catalog")]
    pub catalog: Vec<CatalogEntry>,

    /// Locations of the site table and probe layout.
    #[serde(default)]
    pub data: DataConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            slots: SlotsConfig::default(),
            booster: BoosterConfig::default(),
            storage: StorageConfig::default(),
            catalog: default_catalog(),
            data: DataConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `FRONTIERNAV_BOOSTER_POLICY` overrides `booster.policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var(BOOSTER_POLICY_ENV) {
            match BoosterPolicy::from_tag(&value) {
                Some(policy) => self.booster.policy = policy,
                None => warn!(
                    variable = BOOSTER_POLICY_ENV,
                    value = %value,
                    "Ignoring unrecognised booster policy override"
                ),
            }
        }
    }
}

/// What every slot holds when the graph is first built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialSlot {
    /// A free basic probe, matching the in-game starting state.
    #[default]
    Basic,
    /// The locked sentinel; sites must be unlocked by installing a probe.
    Locked,
}

/// Slot settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SlotsConfig {
    /// Initial probe in every slot.
    #[serde(default)]
    pub initial: InitialSlot,
}

/// Which output channels an adjacent booster raises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoosterPolicy {
    /// Every channel of the boosted probe is raised by the same fraction.
    #[default]
    Flat,
    /// Only the boosted probe's primary channel is raised: mining
    /// production, research revenue, storage capacity.
    ChannelMatched,
}

impl BoosterPolicy {
    /// Parse a policy from its configuration tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "flat" => Some(Self::Flat),
            "channel_matched" => Some(Self::ChannelMatched),
            _ => None,
        }
    }
}

/// Booster settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BoosterConfig {
    /// Bonus scope.
    #[serde(default)]
    pub policy: BoosterPolicy,
}

/// Storage settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Capacity available before any storage probe is installed.
    #[serde(default = "default_starting_capacity")]
    pub starting_capacity: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            starting_capacity: default_starting_capacity(),
        }
    }
}

/// One probe type's line in the catalog.
///
/// The type is kept as a raw tag so that a catalog naming a type this
/// build does not know can still be loaded; such entries are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    /// Probe type tag (e.g. `"mining"`).
    pub probe_type: String,
    /// Highest generation, or `None` for generation-less types.
    #[serde(default)]
    pub max_generation: Option<u8>,
    /// Installation cost per generation (index 0 is generation 1), or a
    /// single cost for generation-less types.
    #[serde(default)]
    pub costs: Vec<u32>,
}

impl CatalogEntry {
    fn new(probe_type: &str, max_generation: Option<u8>, costs: &[u32]) -> Self {
        Self {
            probe_type: probe_type.to_owned(),
            max_generation,
            costs: costs.to_vec(),
        }
    }
}

/// Data file locations used by the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataConfig {
    /// YAML site table.
    #[serde(default = "default_map_path")]
    pub map_path: PathBuf,
    /// YAML probe layout.
    #[serde(default = "default_layout_path")]
    pub layout_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            map_path: default_map_path(),
            layout_path: default_layout_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_starting_capacity() -> u64 {
    6000
}

fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("basic", None, &[0]),
        CatalogEntry::new(
            "mining",
            Some(10),
            &[100, 200, 350, 500, 750, 1000, 1400, 1800, 2400, 3000],
        ),
        CatalogEntry::new("research", Some(6), &[100, 250, 450, 700, 1000, 1400]),
        CatalogEntry::new("booster", Some(2), &[1500, 3000]),
        CatalogEntry::new("duplicator", None, &[5000]),
        CatalogEntry::new("storage", None, &[800]),
        CatalogEntry::new("combat", None, &[0]),
        CatalogEntry::new("locked", None, &[0]),
    ]
}

fn default_map_path() -> PathBuf {
    PathBuf::from("data/mira.yaml")
}

fn default_layout_path() -> PathBuf {
    PathBuf::from("data/layout.yaml")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.slots.initial, InitialSlot::Basic);
        assert_eq!(config.storage.starting_capacity, 6000);
        assert_eq!(config.catalog.len(), 8);
        assert_eq!(config.data.map_path, PathBuf::from("data/mira.yaml"));
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
slots:
  initial: locked

booster:
  policy: channel_matched

storage:
  starting_capacity: 12000

catalog:
  - probe_type: mining
    max_generation: 2
    costs: [10, 20]
  - probe_type: storage
    costs: [99]

data:
  map_path: maps/noctilum.yaml
  layout_path: layouts/noctilum.yaml
";
        let config = EngineConfig::parse(yaml).unwrap();

        assert_eq!(config.slots.initial, InitialSlot::Locked);
        assert_eq!(config.storage.starting_capacity, 12000);
        assert_eq!(config.catalog.len(), 2);
        assert_eq!(config.catalog.first().and_then(|e| e.max_generation), Some(2));
        assert_eq!(config.data.layout_path, PathBuf::from("layouts/noctilum.yaml"));
    }

    #[test]
    fn parse_minimal_yaml() {
        let config = EngineConfig::parse("storage:\n  starting_capacity: 7000\n").unwrap();

        assert_eq!(config.storage.starting_capacity, 7000);
        // Everything else uses defaults
        assert_eq!(config.slots.initial, InitialSlot::Basic);
        assert_eq!(config.catalog, default_catalog());
    }

    #[test]
    fn parse_empty_yaml() {
        let config = EngineConfig::parse("").unwrap();
        assert_eq!(config.catalog.len(), 8);
    }

    #[test]
    fn parse_rejects_bad_policy() {
        let config = EngineConfig::parse("booster:\n  policy: sideways\n");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn booster_policy_tags() {
        assert_eq!(BoosterPolicy::from_tag("flat"), Some(BoosterPolicy::Flat));
        assert_eq!(
            BoosterPolicy::from_tag(" Channel_Matched "),
            Some(BoosterPolicy::ChannelMatched)
        );
        assert_eq!(BoosterPolicy::from_tag("all"), None);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = EngineConfig::from_file(Path::new("/nonexistent/frontiernav-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("frontiernav-config.yaml");
        if path.exists() {
            let config = EngineConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
