//! The probe network: a site graph paired with its probe catalog and
//! engine settings.
//!
//! [`ProbeNetwork`] is the entry point presentation code talks to. It owns
//! the [`SiteGraph`], resolves probes through the [`ProbeCatalog`], and
//! hands out [`OutputEngine`]s for calculation.

use frontiernav_graph::{SiteGraph, connection_pairs};
use frontiernav_types::{
    NetworkReport, NetworkTotals, NodeId, Probe, ProbeOutput, ProbeType, SiteRecord,
};
use tracing::{debug, info};

use crate::catalog::ProbeCatalog;
use crate::config::{BoosterPolicy, EngineConfig, InitialSlot};
use crate::error::EngineError;
use crate::output::OutputEngine;
use crate::totals;

/// A site graph with everything needed to evaluate it.
#[derive(Debug, Clone)]
pub struct ProbeNetwork {
    graph: SiteGraph,
    catalog: ProbeCatalog,
    booster_policy: BoosterPolicy,
    starting_storage: u64,
}

impl ProbeNetwork {
    /// Build a network from site records, deriving connections from each
    /// record's adjacency list.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Graph`] if two records share a code.
    pub fn from_records(
        records: Vec<SiteRecord>,
        config: &EngineConfig,
    ) -> Result<Self, EngineError> {
        let pairs = connection_pairs(&records);
        Self::from_parts(records, &pairs, config)
    }

    /// Build a network from site records and an explicit list of
    /// connection pairs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Graph`] if two records share a code.
    pub fn from_parts(
        records: Vec<SiteRecord>,
        pairs: &[(NodeId, NodeId)],
        config: &EngineConfig,
    ) -> Result<Self, EngineError> {
        let catalog = ProbeCatalog::from_entries(&config.catalog);
        let initial = match config.slots.initial {
            InitialSlot::Basic => catalog.basic(),
            InitialSlot::Locked => catalog.locked(),
        };
        let graph = SiteGraph::build(records, pairs, &initial)?;
        info!(
            sites = graph.site_count(),
            connections = graph.connection_count(),
            probes = catalog.len(),
            policy = ?config.booster.policy,
            "Probe network ready"
        );
        Ok(Self {
            graph,
            catalog,
            booster_policy: config.booster.policy,
            starting_storage: config.storage.starting_capacity,
        })
    }

    /// The site graph.
    pub const fn graph(&self) -> &SiteGraph {
        &self.graph
    }

    /// The probe catalog.
    pub const fn catalog(&self) -> &ProbeCatalog {
        &self.catalog
    }

    /// The booster policy in effect.
    pub const fn booster_policy(&self) -> BoosterPolicy {
        self.booster_policy
    }

    /// Storage capacity before any storage probe.
    pub const fn starting_storage(&self) -> u64 {
        self.starting_storage
    }

    /// An output engine over the current graph.
    pub const fn engine(&self) -> OutputEngine<'_> {
        OutputEngine::new(&self.graph, self.booster_policy)
    }

    /// Install `probe` at `node`, returning the probe it replaced.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Graph`] if `node` is unknown.
    pub fn install(&mut self, node: &NodeId, probe: Probe) -> Result<Probe, EngineError> {
        debug!(node = %node, probe = %probe.name, "Installing probe");
        Ok(self.graph.install(node, probe)?)
    }

    /// Install the catalog probe of the given type and generation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProbeNotInCatalog`] if the catalog does not
    /// offer it, or [`EngineError::Graph`] if `node` is unknown.
    pub fn install_kind(
        &mut self,
        node: &NodeId,
        probe_type: ProbeType,
        generation: Option<u8>,
    ) -> Result<Probe, EngineError> {
        let probe = self.catalog.resolve(probe_type, generation)?.clone();
        self.install(node, probe)
    }

    /// Install the catalog probe named by a type tag and generation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownProbeType`] for an unrecognised tag,
    /// plus everything [`ProbeNetwork::install_kind`] returns.
    pub fn install_tag(
        &mut self,
        node: &NodeId,
        tag: &str,
        generation: Option<u8>,
    ) -> Result<Probe, EngineError> {
        let probe = self.catalog.resolve_tag(tag, generation)?.clone();
        self.install(node, probe)
    }

    /// Lock the slot at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Graph`] if `node` is unknown.
    pub fn lock(&mut self, node: &NodeId) -> Result<(), EngineError> {
        debug!(node = %node, "Locking slot");
        Ok(self.graph.lock(node)?)
    }

    /// Output of the probe installed at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Graph`] if `node` is unknown, or
    /// [`EngineError::ArithmeticOverflow`] on overflow.
    pub fn compute_node_output(&self, node: &NodeId) -> Result<ProbeOutput, EngineError> {
        self.engine().calculate_output(node)
    }

    /// Network-wide totals.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ArithmeticOverflow`] if a sum overflows.
    pub fn compute_totals(&self) -> Result<NetworkTotals, EngineError> {
        totals::compute_totals(&self.engine(), self.starting_storage)
    }

    /// Per-site outputs plus totals.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ArithmeticOverflow`] if a sum overflows.
    pub fn compute_report(&self) -> Result<NetworkReport, EngineError> {
        totals::compute_report(&self.engine(), self.starting_storage)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use frontiernav_types::{ProductionRank, RevenueRank};

    use super::*;

    fn record(code: &str, adjacent: &[&str]) -> SiteRecord {
        SiteRecord {
            id: NodeId::from(code),
            name: format!("Site {code}"),
            region: String::from("Primordia"),
            production_rank: ProductionRank::B,
            revenue_rank: RevenueRank::C,
            combat_rank: String::new(),
            sightseeing: Vec::new(),
            rare_resources: Vec::new(),
            adjacent: adjacent.iter().map(|&a| NodeId::from(a)).collect(),
        }
    }

    fn records() -> Vec<SiteRecord> {
        vec![record("n1", &["n2"]), record("n2", &["n3"]), record("n3", &[])]
    }

    fn id(code: &str) -> NodeId {
        NodeId::from(code)
    }

    #[test]
    fn from_records_derives_connections() {
        let network = ProbeNetwork::from_records(records(), &EngineConfig::default()).unwrap();
        assert_eq!(network.graph().connection_count(), 2);
        assert_eq!(network.starting_storage(), 6000);
    }

    #[test]
    fn locked_initial_slots() {
        let mut config = EngineConfig::default();
        config.slots.initial = InitialSlot::Locked;
        let network = ProbeNetwork::from_records(records(), &config).unwrap();
        let probe = network.graph().probe_at(&id("n1")).unwrap();
        assert_eq!(probe.probe_type(), ProbeType::Locked);
    }

    #[test]
    fn install_tag_uses_catalog_cost() {
        let mut network = ProbeNetwork::from_records(records(), &EngineConfig::default()).unwrap();
        let previous = network.install_tag(&id("n1"), "mining", Some(3)).unwrap();
        assert_eq!(previous.probe_type(), ProbeType::Basic);
        let installed = network.graph().probe_at(&id("n1")).unwrap();
        assert_eq!(installed.cost, 350);
        assert_eq!(installed.name, "Mining G3 Probe");
    }

    #[test]
    fn install_rejects_unknown_tag_and_generation() {
        let mut network = ProbeNetwork::from_records(records(), &EngineConfig::default()).unwrap();
        assert_eq!(
            network.install_tag(&id("n1"), "teleporter", None),
            Err(EngineError::UnknownProbeType(String::from("teleporter")))
        );
        assert!(matches!(
            network.install_kind(&id("n1"), ProbeType::Booster, Some(3)),
            Err(EngineError::ProbeNotInCatalog { .. })
        ));
        assert!(matches!(
            network.install_kind(&id("nowhere"), ProbeType::Storage, None),
            Err(EngineError::Graph { .. })
        ));
    }

    #[test]
    fn lock_then_compute() {
        let mut network = ProbeNetwork::from_records(records(), &EngineConfig::default()).unwrap();
        assert_eq!(network.lock(&id("n2")), Ok(()));
        assert_eq!(
            network.compute_node_output(&id("n2")),
            Ok(ProbeOutput::zero())
        );
        let totals = network.compute_totals().unwrap();
        // Two basic slots at rank B / C: 175 + 175, 325 + 325.
        assert_eq!(totals.production_total, 350);
        assert_eq!(totals.revenue_total, 650);
    }
}
