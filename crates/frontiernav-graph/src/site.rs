//! Site nodes and the probe slot each one owns.
//!
//! A [`Site`] wraps the immutable [`SiteRecord`] from the data loader and
//! adds the two pieces of state the graph manages: the ids of the
//! connections touching the site, and its [`ProbeSlot`].
//!
//! The slot is the only mutable part of a site. It is reached through the
//! site (and the site through the graph), so there is no separate
//! site-to-slot index to keep in sync.

use frontiernav_types::{ConnectionId, NodeId, Probe, ProbeType, SiteRecord};

/// Mutable binding of one probe to one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSlot {
    installed: Probe,
}

impl ProbeSlot {
    /// Create a slot with `probe` installed.
    pub const fn new(probe: Probe) -> Self {
        Self { installed: probe }
    }

    /// The currently installed probe.
    pub const fn installed(&self) -> &Probe {
        &self.installed
    }

    /// Replace the installed probe, returning the one it displaced.
    pub fn install_probe(&mut self, probe: Probe) -> Probe {
        core::mem::replace(&mut self.installed, probe)
    }

    /// Force the locked sentinel into this slot.
    pub fn lock_probe(&mut self) {
        self.installed = Probe::locked();
    }

    /// Whether the slot holds the locked sentinel.
    pub fn is_locked(&self) -> bool {
        self.installed.is(ProbeType::Locked)
    }
}

/// A site in the probe network.
#[derive(Debug, Clone)]
pub struct Site {
    /// Static attributes from the data loader.
    pub record: SiteRecord,
    /// Connections touching this site, in the order they were added.
    connections: Vec<ConnectionId>,
    slot: ProbeSlot,
}

impl Site {
    /// Create a site with an initial probe and no connections.
    pub const fn new(record: SiteRecord, initial: Probe) -> Self {
        Self {
            record,
            connections: Vec::new(),
            slot: ProbeSlot::new(initial),
        }
    }

    /// Site code.
    pub const fn id(&self) -> &NodeId {
        &self.record.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Base production rate from the site's rank.
    pub const fn production_base(&self) -> u32 {
        self.record.production_base()
    }

    /// Base revenue rate from the site's rank.
    pub const fn revenue_base(&self) -> u32 {
        self.record.revenue_base()
    }

    /// Connection ids in insertion order.
    pub fn connections(&self) -> &[ConnectionId] {
        &self.connections
    }

    /// Number of connections touching this site.
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// The site's probe slot.
    pub const fn slot(&self) -> &ProbeSlot {
        &self.slot
    }

    /// Mutable access to the site's probe slot.
    pub const fn slot_mut(&mut self) -> &mut ProbeSlot {
        &mut self.slot
    }

    /// Shorthand for the installed probe.
    pub const fn probe(&self) -> &Probe {
        self.slot.installed()
    }

    pub(crate) fn push_connection(&mut self, id: ConnectionId) {
        self.connections.push(id);
    }
}

#[cfg(test)]
mod tests {
    use frontiernav_types::{ProbeKind, ProductionRank, RevenueRank};

    use super::*;

    fn record() -> SiteRecord {
        SiteRecord {
            id: NodeId::from("fn106"),
            name: String::from("FN Site 106"),
            region: String::from("Primordia"),
            production_rank: ProductionRank::B,
            revenue_rank: RevenueRank::E,
            combat_rank: String::from("B"),
            sightseeing: vec![String::from("Turtle Nest")],
            rare_resources: vec![String::from("Arc Sand Ore")],
            adjacent: Vec::new(),
        }
    }

    #[test]
    fn new_site_has_initial_probe() {
        let site = Site::new(record(), Probe::basic());
        assert!(site.probe().is(ProbeType::Basic));
        assert_eq!(site.degree(), 0);
        assert_eq!(site.production_base(), 350);
        assert_eq!(site.revenue_base(), 300);
    }

    #[test]
    fn install_returns_previous_probe() {
        let mut slot = ProbeSlot::new(Probe::basic());
        let mining = Probe::new(ProbeKind::with_generation(ProbeType::Mining, 3), 350);
        let previous = slot.install_probe(mining.clone());
        assert_eq!(previous, Probe::basic());
        assert_eq!(slot.installed(), &mining);
    }

    #[test]
    fn lock_installs_sentinel() {
        let mut slot = ProbeSlot::new(Probe::basic());
        assert!(!slot.is_locked());
        slot.lock_probe();
        assert!(slot.is_locked());
        assert_eq!(slot.installed().cost, 0);
    }
}
