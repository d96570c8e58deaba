//! Core value structs for the FrontierNav probe network.
//!
//! Covers site records consumed from the data loader, probe definitions,
//! and the output and totals snapshots handed to presentation code.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{ProbeType, ProductionRank, RevenueRank};
use crate::ids::NodeId;

// ---------------------------------------------------------------------------
// Site records
// ---------------------------------------------------------------------------

/// Static attributes of one site as produced by the data loader.
///
/// Immutable once the graph is built. The adjacency list is only used to
/// derive connection pairs; the graph owns the resulting connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SiteRecord {
    /// Unique site code.
    pub id: NodeId,
    /// Display name (e.g. `"FN Site 101"`).
    pub name: String,
    /// Continent the site belongs to.
    #[serde(default)]
    pub region: String,
    /// Production rank.
    pub production_rank: ProductionRank,
    /// Revenue rank.
    pub revenue_rank: RevenueRank,
    /// Combat support rank. Carried for display only.
    #[serde(default)]
    pub combat_rank: String,
    /// Sightseeing spots discovered at this site.
    #[serde(default)]
    pub sightseeing: Vec<String>,
    /// Rare resources a mining probe can turn up here.
    #[serde(default)]
    pub rare_resources: Vec<String>,
    /// Codes of the sites this one connects to.
    #[serde(default)]
    pub adjacent: Vec<NodeId>,
}

impl SiteRecord {
    /// Base production rate from the production rank.
    pub const fn production_base(&self) -> u32 {
        self.production_rank.base_rate()
    }

    /// Base revenue rate from the revenue rank.
    pub const fn revenue_base(&self) -> u32 {
        self.revenue_rank.base_rate()
    }
}

// ---------------------------------------------------------------------------
// Probes
// ---------------------------------------------------------------------------

/// Identity of a probe: its type plus generation.
///
/// Generation-less types carry `None`. Two kinds are link-compatible exactly
/// when they are equal, so generation-less probes match on type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProbeKind {
    /// Probe family.
    pub probe_type: ProbeType,
    /// Generation (1-based), or `None` for generation-less types.
    pub generation: Option<u8>,
}

impl ProbeKind {
    /// A generation-less kind.
    pub const fn plain(probe_type: ProbeType) -> Self {
        Self {
            probe_type,
            generation: None,
        }
    }

    /// A kind with an explicit generation.
    pub const fn with_generation(probe_type: ProbeType, generation: u8) -> Self {
        Self {
            probe_type,
            generation: Some(generation),
        }
    }

    /// Generation with the sentinel `0` standing in for "no generation".
    pub fn generation_or_zero(self) -> u8 {
        self.generation.unwrap_or(0)
    }
}

impl core::fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.generation {
            Some(g) => write!(f, "{} G{g}", self.probe_type.label()),
            None => f.write_str(self.probe_type.label()),
        }
    }
}

/// An installable probe. Immutable value object shared by every slot that
/// installs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Probe {
    /// Type and generation.
    pub kind: ProbeKind,
    /// Display name (e.g. `"Mining G5 Probe"`).
    pub name: String,
    /// Installation cost in credits.
    pub cost: u32,
}

impl Probe {
    /// Build a probe with the conventional display name for its kind.
    pub fn new(kind: ProbeKind, cost: u32) -> Self {
        let name = match kind.probe_type {
            ProbeType::Locked => String::from("Probe Slot Locked"),
            _ => format!("{kind} Probe"),
        };
        Self { kind, name, cost }
    }

    /// The free basic probe every unlocked slot starts with.
    pub fn basic() -> Self {
        Self::new(ProbeKind::plain(ProbeType::Basic), 0)
    }

    /// The sentinel installed by locking a slot.
    pub fn locked() -> Self {
        Self::new(ProbeKind::plain(ProbeType::Locked), 0)
    }

    /// Shorthand for `self.kind.probe_type`.
    pub const fn probe_type(&self) -> ProbeType {
        self.kind.probe_type
    }

    /// Shorthand for `self.kind.generation`.
    pub const fn generation(&self) -> Option<u8> {
        self.kind.generation
    }

    /// Whether this probe is of the given type.
    pub fn is(&self, probe_type: ProbeType) -> bool {
        self.kind.probe_type == probe_type
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Output of one probe slot, truncated to whole units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ProbeOutput {
    /// Miranium produced.
    pub production: u64,
    /// Credits earned.
    pub revenue: u64,
    /// Storage capacity added.
    pub storage: u64,
    /// Rare resources this slot may turn up.
    pub resources: BTreeSet<String>,
}

impl ProbeOutput {
    /// The all-zero output of a locked slot.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Network-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NetworkTotals {
    /// Sum of per-slot production.
    pub production_total: u64,
    /// Sum of per-slot revenue.
    pub revenue_total: u64,
    /// Starting capacity plus per-slot storage.
    pub storage_total: u64,
    /// Union of every slot's possible rare resources.
    pub resources: BTreeSet<String>,
    /// Sum of installation costs of every installed probe.
    pub cost_total: u64,
}

/// One site's line in a [`NetworkReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NodeOutputEntry {
    /// Site code.
    pub node: NodeId,
    /// Site display name.
    pub name: String,
    /// Continent.
    pub region: String,
    /// Display name of the installed probe.
    pub probe: String,
    /// The slot's output.
    pub output: ProbeOutput,
}

/// Full breakdown of a network: every site's output plus the totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NetworkReport {
    /// Per-site outputs in site-code order.
    pub nodes: Vec<NodeOutputEntry>,
    /// Aggregated totals.
    pub totals: NetworkTotals,
}
