//! Link groups: connected chains of identical probes.
//!
//! A probe's link group is found by breadth-first search from its site,
//! stepping only onto neighbors whose installed probe has exactly the same
//! type and generation. The group is transitive, so a chain of matching
//! probes links together even when its ends are far apart.

use std::collections::BTreeSet;

use frontiernav_graph::SiteGraph;
use frontiernav_types::{NodeId, ProbeKind};

use crate::error::EngineError;

/// Sites linked to `origin` when a probe of `kind` sits there.
///
/// `origin` is always in the group, whatever is actually installed there,
/// so the same search serves "as if" evaluations.
///
/// # Errors
///
/// Returns [`EngineError::Graph`] if `origin` is not in the graph.
pub fn linked_sites(
    graph: &SiteGraph,
    origin: &NodeId,
    kind: ProbeKind,
) -> Result<BTreeSet<NodeId>, EngineError> {
    Ok(graph.matching_component(origin, |site| site.probe().kind == kind)?)
}

/// Size of the link group of a probe of `kind` at `origin`.
///
/// # Errors
///
/// Same as [`linked_sites`].
pub fn count_links(graph: &SiteGraph, origin: &NodeId, kind: ProbeKind) -> Result<usize, EngineError> {
    linked_sites(graph, origin, kind).map(|group| group.len())
}
