//! Site graph for the FrontierNav probe network.
//!
//! This crate models the map: sites as nodes, connections as undirected
//! edges, and the probe slot every site owns.
//!
//! # Modules
//!
//! - [`connection`] -- Undirected edges and unordered-pair identity.
//! - [`error`] -- Error types for graph operations.
//! - [`site`] -- [`Site`] and its [`ProbeSlot`].
//! - [`site_graph`] -- The graph: construction from records, adjacency
//!   queries, slot mutation and matching-component search.
//!
//! [`Site`]: site::Site
//! [`ProbeSlot`]: site::ProbeSlot

pub mod connection;
pub mod error;
pub mod site;
pub mod site_graph;

// Re-export primary types at crate root.
pub use connection::Connection;
pub use error::GraphError;
pub use site::{ProbeSlot, Site};
pub use site_graph::{SiteGraph, connection_pairs};
