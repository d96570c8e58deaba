//! Error types for the `frontiernav-graph` crate.
//!
//! All fallible operations in this crate return [`GraphError`].

use frontiernav_types::{ConnectionId, NodeId};

/// Errors that can occur during site-graph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A site was not found in the graph.
    #[error("site not found: {0}")]
    NodeNotFound(NodeId),

    /// A connection was not found in the graph.
    #[error("connection not found: {0}")]
    ConnectionNotFound(ConnectionId),

    /// A site with the same code was already added.
    #[error("duplicate site id: {0}")]
    DuplicateNode(NodeId),

    /// Connection ids are `u32`; the graph already holds this many.
    #[error("too many connections: {0}")]
    TooManyConnections(usize),

    /// The far endpoint of a connection was requested for a site that is
    /// not one of its endpoints.
    #[error("site {node} is not part of {connection}")]
    NotAnEndpoint {
        /// The offending site.
        node: NodeId,
        /// The connection that was asked.
        connection: ConnectionId,
    },
}
