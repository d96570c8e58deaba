//! Error types for the `frontiernav` binary.
//!
//! [`CliError`] wraps every failure mode between reading the config and
//! printing the report, so `run` can propagate with `?`.

use frontiernav_engine::{ConfigError, EngineError};

/// Top-level error for the `frontiernav` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration or data file loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// Probe resolution or output calculation failed.
    #[error("engine error: {source}")]
    Engine {
        /// The underlying engine error.
        #[from]
        source: EngineError,
    },

    /// The report could not be serialized.
    #[error("failed to serialize report: {source}")]
    Serialize {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The site table file does not exist.
    #[error("site table not found: {path}")]
    MissingSiteTable {
        /// Path that was looked up.
        path: String,
    },
}
