//! Error types for the `frontiernav-engine` crate.

use frontiernav_graph::GraphError;
use frontiernav_types::{ProbeType, UnknownProbeType};

/// Errors that can occur while resolving probes or computing outputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A graph lookup failed.
    #[error("graph error: {source}")]
    Graph {
        /// The underlying graph error.
        #[from]
        source: GraphError,
    },

    /// A probe type tag could not be resolved.
    #[error("unknown probe type: {0:?}")]
    UnknownProbeType(String),

    /// The catalog holds no probe with this type and generation.
    #[error("no {probe_type} probe with generation {generation:?} in the catalog")]
    ProbeNotInCatalog {
        /// Requested type.
        probe_type: ProbeType,
        /// Requested generation.
        generation: Option<u8>,
    },

    /// Arithmetic overflow during a checked operation.
    #[error("arithmetic overflow in output calculation")]
    ArithmeticOverflow,
}

impl From<UnknownProbeType> for EngineError {
    fn from(err: UnknownProbeType) -> Self {
        Self::UnknownProbeType(err.0)
    }
}
