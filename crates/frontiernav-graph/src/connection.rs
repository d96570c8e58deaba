//! Undirected edges between two sites.
//!
//! A [`Connection`] is created once while the graph is built and never
//! changes afterwards. Both endpoint sites list the connection's id, so
//! adjacency is answered by walking a site's connections and taking the
//! far endpoint of each.

use frontiernav_types::{ConnectionId, NodeId};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// A symmetric edge between two distinct sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Sequential identifier assigned by the graph.
    pub id: ConnectionId,
    /// First endpoint, as given when the connection was created.
    pub first: NodeId,
    /// Second endpoint.
    pub second: NodeId,
}

impl Connection {
    /// Create a connection between two sites.
    pub const fn new(id: ConnectionId, first: NodeId, second: NodeId) -> Self {
        Self { id, first, second }
    }

    /// Whether `node` is one of this connection's endpoints.
    pub fn involves(&self, node: &NodeId) -> bool {
        self.first == *node || self.second == *node
    }

    /// Return the endpoint opposite to `node`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotAnEndpoint`] if `node` is neither endpoint.
    pub fn other_endpoint(&self, node: &NodeId) -> Result<&NodeId, GraphError> {
        if self.first == *node {
            Ok(&self.second)
        } else if self.second == *node {
            Ok(&self.first)
        } else {
            Err(GraphError::NotAnEndpoint {
                node: node.clone(),
                connection: self.id,
            })
        }
    }

    /// The unordered identity of this connection: its endpoints in sorted
    /// order. Two connections with the same key join the same pair of sites.
    pub fn pair_key(&self) -> (NodeId, NodeId) {
        pair_key(&self.first, &self.second)
    }
}

impl core::fmt::Display for Connection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} <-> {}", self.first, self.second)
    }
}

/// Sorted endpoint pair used to deduplicate unordered connections.
pub fn pair_key(a: &NodeId, b: &NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn() -> Connection {
        Connection::new(ConnectionId(0), NodeId::from("fn101"), NodeId::from("fn105"))
    }

    #[test]
    fn other_endpoint_both_directions() {
        let c = conn();
        assert_eq!(c.other_endpoint(&NodeId::from("fn101")).ok(), Some(&NodeId::from("fn105")));
        assert_eq!(c.other_endpoint(&NodeId::from("fn105")).ok(), Some(&NodeId::from("fn101")));
    }

    #[test]
    fn other_endpoint_rejects_stranger() {
        let c = conn();
        let err = c.other_endpoint(&NodeId::from("fn999"));
        assert_eq!(
            err,
            Err(GraphError::NotAnEndpoint {
                node: NodeId::from("fn999"),
                connection: ConnectionId(0),
            })
        );
        assert!(
            err.err()
                .is_some_and(|e| e.to_string().contains("fn999"))
        );
    }

    #[test]
    fn pair_key_is_order_independent() {
        let a = NodeId::from("fn105");
        let b = NodeId::from("fn101");
        assert_eq!(pair_key(&a, &b), pair_key(&b, &a));
        assert_eq!(conn().pair_key(), pair_key(&a, &b));
    }

    #[test]
    fn involves_only_endpoints() {
        let c = conn();
        assert!(c.involves(&NodeId::from("fn101")));
        assert!(!c.involves(&NodeId::from("fn102")));
    }
}
