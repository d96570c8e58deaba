//! The probe catalog: exactly one [`Probe`] per type and generation.
//!
//! Built from the `catalog` section of the configuration. Entries naming an
//! unknown probe type are logged and skipped so that an older build can
//! still read a newer catalog. Basic and locked probes are always present
//! and always free, as are combat probes.

use std::collections::BTreeMap;

use frontiernav_types::{Probe, ProbeKind, ProbeType};
use tracing::warn;

use crate::config::CatalogEntry;
use crate::error::EngineError;

/// Every installable probe, keyed by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeCatalog {
    probes: BTreeMap<ProbeKind, Probe>,
}

impl ProbeCatalog {
    /// Build a catalog from configuration entries.
    pub fn from_entries(entries: &[CatalogEntry]) -> Self {
        let mut probes = BTreeMap::new();

        for entry in entries {
            let probe_type = match entry.probe_type.parse::<ProbeType>() {
                Ok(t) => t,
                Err(err) => {
                    warn!(%err, "Skipping catalog entry");
                    continue;
                }
            };

            match entry.max_generation {
                Some(max) => {
                    for generation in 1..=max {
                        let index = usize::from(generation).saturating_sub(1);
                        let cost = entry.costs.get(index).copied().unwrap_or_else(|| {
                            warn!(%probe_type, generation, "No cost listed, using 0");
                            0
                        });
                        let kind = ProbeKind::with_generation(probe_type, generation);
                        probes.insert(kind, Probe::new(kind, free_or(probe_type, cost)));
                    }
                }
                None => {
                    let cost = entry.costs.first().copied().unwrap_or(0);
                    let kind = ProbeKind::plain(probe_type);
                    probes.insert(kind, Probe::new(kind, free_or(probe_type, cost)));
                }
            }
        }

        probes
            .entry(ProbeKind::plain(ProbeType::Basic))
            .or_insert_with(Probe::basic);
        probes
            .entry(ProbeKind::plain(ProbeType::Locked))
            .or_insert_with(Probe::locked);

        Self { probes }
    }

    /// Look up a probe by kind.
    pub fn get(&self, kind: ProbeKind) -> Option<&Probe> {
        self.probes.get(&kind)
    }

    /// Look up a probe by type and generation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ProbeNotInCatalog`] if no such probe exists.
    pub fn resolve(
        &self,
        probe_type: ProbeType,
        generation: Option<u8>,
    ) -> Result<&Probe, EngineError> {
        self.get(ProbeKind {
            probe_type,
            generation,
        })
        .ok_or(EngineError::ProbeNotInCatalog {
            probe_type,
            generation,
        })
    }

    /// Look up a probe by type tag and generation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownProbeType`] if the tag names no probe
    /// type, or [`EngineError::ProbeNotInCatalog`] if the generation is not
    /// offered.
    pub fn resolve_tag(&self, tag: &str, generation: Option<u8>) -> Result<&Probe, EngineError> {
        let probe_type: ProbeType = tag.parse()?;
        self.resolve(probe_type, generation)
    }

    /// The basic probe.
    pub fn basic(&self) -> Probe {
        self.get(ProbeKind::plain(ProbeType::Basic))
            .cloned()
            .unwrap_or_else(Probe::basic)
    }

    /// The locked sentinel.
    pub fn locked(&self) -> Probe {
        self.get(ProbeKind::plain(ProbeType::Locked))
            .cloned()
            .unwrap_or_else(Probe::locked)
    }

    /// Every probe in type, then generation order.
    pub fn iter(&self) -> impl Iterator<Item = &Probe> {
        self.probes.values()
    }

    /// Display names of every probe, in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.probes.values().map(|p| p.name.as_str()).collect()
    }

    /// Number of probes.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// Whether the catalog is empty. Never true for a built catalog.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl Default for ProbeCatalog {
    fn default() -> Self {
        Self::from_entries(&crate::config::EngineConfig::default().catalog)
    }
}

/// Basic, combat and locked probes cost nothing whatever the catalog says.
fn free_or(probe_type: ProbeType, cost: u32) -> u32 {
    match probe_type {
        ProbeType::Basic | ProbeType::Combat | ProbeType::Locked => {
            if cost != 0 {
                warn!(%probe_type, cost, "Ignoring cost for a free probe type");
            }
            0
        }
        _ => cost,
    }
}
