//! Site graph: sites as nodes, connections as undirected edges.
//!
//! The [`SiteGraph`] is the spatial backbone of the probe network. It stores
//! every [`Site`] (each owning its probe slot) and every [`Connection`], and
//! answers adjacency queries by following a site's connection list.
//!
//! Connections are kept in a `Vec` indexed by [`ConnectionId`], and a set of
//! sorted endpoint pairs guarantees at most one connection per pair of sites.
//! The graph may contain cycles; traversals track visited sites.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use frontiernav_types::{ConnectionId, NodeId, Probe, SiteRecord};
use tracing::{debug, warn};

use crate::connection::{self, Connection};
use crate::error::GraphError;
use crate::site::Site;

/// The probe network graph.
#[derive(Debug, Clone, Default)]
pub struct SiteGraph {
    /// All sites indexed by code.
    sites: BTreeMap<NodeId, Site>,
    /// All connections; a connection's id is its index.
    connections: Vec<Connection>,
    /// Sorted endpoint pairs of every connection.
    pairs: BTreeSet<(NodeId, NodeId)>,
}

impl SiteGraph {
    /// Create an empty graph.
    pub const fn new() -> Self {
        Self {
            sites: BTreeMap::new(),
            connections: Vec::new(),
            pairs: BTreeSet::new(),
        }
    }

    /// Build a graph from site records and unordered connection pairs.
    ///
    /// Every site starts with a copy of `initial` installed. Pairs that name
    /// an unknown site or join a site to itself are logged and skipped;
    /// repeated pairs (in either order) collapse into one connection.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if two records share a code.
    pub fn build(
        records: Vec<SiteRecord>,
        pairs: &[(NodeId, NodeId)],
        initial: &Probe,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for record in records {
            graph.add_site(record, initial.clone())?;
        }

        for (a, b) in pairs {
            match graph.connect(a, b) {
                Ok(_) => {}
                Err(GraphError::NodeNotFound(missing)) => {
                    warn!(from = %a, to = %b, %missing, "Skipping connection to unknown site");
                }
                Err(other) => return Err(other),
            }
        }

        debug!(
            sites = graph.site_count(),
            connections = graph.connection_count(),
            "Site graph built"
        );
        Ok(graph)
    }

    // -------------------------------------------------------------------
    // Site operations
    // -------------------------------------------------------------------

    /// Add a site with `initial` installed in its slot.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if a site with the same code
    /// already exists.
    pub fn add_site(&mut self, record: SiteRecord, initial: Probe) -> Result<(), GraphError> {
        if self.sites.contains_key(&record.id) {
            return Err(GraphError::DuplicateNode(record.id));
        }
        self.sites.insert(record.id.clone(), Site::new(record, initial));
        Ok(())
    }

    /// Get a site by code.
    pub fn site(&self, id: &NodeId) -> Option<&Site> {
        self.sites.get(id)
    }

    /// Get a site by code, or fail with [`GraphError::NodeNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the code is unknown.
    pub fn require_site(&self, id: &NodeId) -> Result<&Site, GraphError> {
        self.sites
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))
    }

    /// Number of sites.
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Iterate over all sites in code order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> {
        self.sites.values()
    }

    /// Sites belonging to `region`, in code order.
    pub fn sites_in_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a Site> {
        self.sites.values().filter(move |s| s.record.region == region)
    }

    /// Distinct region names, sorted.
    pub fn regions(&self) -> BTreeSet<&str> {
        self.sites.values().map(|s| s.record.region.as_str()).collect()
    }

    // -------------------------------------------------------------------
    // Slot operations
    // -------------------------------------------------------------------

    /// The probe installed at a site.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the code is unknown.
    pub fn probe_at(&self, id: &NodeId) -> Result<&Probe, GraphError> {
        self.require_site(id).map(Site::probe)
    }

    /// Install `probe` at a site, returning the displaced probe.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the code is unknown.
    pub fn install(&mut self, id: &NodeId, probe: Probe) -> Result<Probe, GraphError> {
        let site = self
            .sites
            .get_mut(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))?;
        Ok(site.slot_mut().install_probe(probe))
    }

    /// Lock a site's slot.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the code is unknown.
    pub fn lock(&mut self, id: &NodeId) -> Result<(), GraphError> {
        let site = self
            .sites
            .get_mut(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.clone()))?;
        site.slot_mut().lock_probe();
        Ok(())
    }

    // -------------------------------------------------------------------
    // Connection operations
    // -------------------------------------------------------------------

    /// Connect two sites.
    ///
    /// Returns the new connection's id, or `None` when the pair is already
    /// connected or both ends are the same site.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing,
    /// or [`GraphError::TooManyConnections`] once every connection id is
    /// taken.
    pub fn connect(&mut self, a: &NodeId, b: &NodeId) -> Result<Option<ConnectionId>, GraphError> {
        if !self.sites.contains_key(a) {
            return Err(GraphError::NodeNotFound(a.clone()));
        }
        if !self.sites.contains_key(b) {
            return Err(GraphError::NodeNotFound(b.clone()));
        }
        if a == b {
            warn!(site = %a, "Ignoring connection from a site to itself");
            return Ok(None);
        }
        let key = connection::pair_key(a, b);
        if self.pairs.contains(&key) {
            return Ok(None);
        }

        let id = next_connection_id(self.connections.len())?;
        self.pairs.insert(key);
        self.connections.push(Connection::new(id, a.clone(), b.clone()));
        for end in [a, b] {
            if let Some(site) = self.sites.get_mut(end) {
                site.push_connection(id);
            }
        }
        Ok(Some(id))
    }

    /// Get a connection by id.
    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        usize::try_from(id.0)
            .ok()
            .and_then(|index| self.connections.get(index))
    }

    /// Number of connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Iterate over all connections in creation order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.iter()
    }

    /// Whether two sites are directly connected.
    pub fn are_connected(&self, a: &NodeId, b: &NodeId) -> bool {
        self.pairs.contains(&connection::pair_key(a, b))
    }

    // -------------------------------------------------------------------
    // Graph queries
    // -------------------------------------------------------------------

    /// Sites adjacent to `id`, in the order their connections were added.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the code is unknown,
    /// [`GraphError::ConnectionNotFound`] if the site lists a connection the
    /// graph does not hold, or [`GraphError::NotAnEndpoint`] if a listed
    /// connection does not touch the site.
    pub fn adjacent_nodes(&self, id: &NodeId) -> Result<Vec<&Site>, GraphError> {
        let site = self.require_site(id)?;
        let mut result = Vec::with_capacity(site.degree());
        for &connection_id in site.connections() {
            let conn = self
                .connection(connection_id)
                .ok_or(GraphError::ConnectionNotFound(connection_id))?;
            let far = conn.other_endpoint(id)?;
            result.push(self.require_site(far)?);
        }
        Ok(result)
    }

    /// Probes installed on the sites adjacent to `id`, in adjacency order.
    ///
    /// # Errors
    ///
    /// Same as [`SiteGraph::adjacent_nodes`].
    pub fn adjacent_probes(&self, id: &NodeId) -> Result<Vec<&Probe>, GraphError> {
        Ok(self
            .adjacent_nodes(id)?
            .into_iter()
            .map(Site::probe)
            .collect())
    }

    /// Breadth-first search from `start` through sites accepted by
    /// `matches`.
    ///
    /// The start site is always part of the result. A neighbor joins the
    /// result, and the search continues through it, only if `matches`
    /// accepts it, so the result is the whole matching component reachable
    /// from `start`. Each site is examined at most once.
    ///
    /// # Errors
    ///
    /// Same as [`SiteGraph::adjacent_nodes`].
    pub fn matching_component<F>(
        &self,
        start: &NodeId,
        mut matches: F,
    ) -> Result<BTreeSet<NodeId>, GraphError>
    where
        F: FnMut(&Site) -> bool,
    {
        self.require_site(start)?;

        let mut component = BTreeSet::new();
        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::new();
        component.insert(start.clone());
        visited.insert(start.clone());
        queue.push_back(start.clone());

        while let Some(current) = queue.pop_front() {
            for neighbor in self.adjacent_nodes(&current)? {
                if !visited.insert(neighbor.id().clone()) {
                    continue;
                }
                if matches(neighbor) {
                    component.insert(neighbor.id().clone());
                    queue.push_back(neighbor.id().clone());
                }
            }
        }

        Ok(component)
    }
}

/// Id for the connection stored at index `count`.
fn next_connection_id(count: usize) -> Result<ConnectionId, GraphError> {
    u32::try_from(count)
        .map(ConnectionId)
        .map_err(|_overflow| GraphError::TooManyConnections(count))
}

/// Derive unordered connection pairs from the adjacency lists of site
/// records.
///
/// Each record contributes one pair per listed neighbor, so a connection
/// listed on both ends appears twice; [`SiteGraph::build`] collapses those.
pub fn connection_pairs(records: &[SiteRecord]) -> Vec<(NodeId, NodeId)> {
    records
        .iter()
        .flat_map(|r| r.adjacent.iter().map(|adj| (r.id.clone(), adj.clone())))
        .collect()
}
