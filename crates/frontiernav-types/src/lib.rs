//! Shared type definitions for the FrontierNav probe network.
//!
//! This crate is the single source of truth for the values exchanged
//! between the graph, the output engine and presentation code. Types
//! flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Identifier wrappers for sites and connections
//! - [`enums`] -- Rank tiers, output channels and probe types
//! - [`structs`] -- Site records, probes, outputs and totals

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Channel, ProbeType, ProductionRank, RevenueRank, UnknownProbeType};
pub use ids::{ConnectionId, NodeId};
pub use structs::{
    NetworkReport, NetworkTotals, NodeOutputEntry, Probe, ProbeKind, ProbeOutput, SiteRecord,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for the presentation layer.

    #[test]
    fn export_bindings() {
        // Exported files land in `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::NodeId::export_all();
        let _ = crate::ids::ConnectionId::export_all();

        let _ = crate::enums::ProductionRank::export_all();
        let _ = crate::enums::RevenueRank::export_all();
        let _ = crate::enums::Channel::export_all();
        let _ = crate::enums::ProbeType::export_all();

        let _ = crate::structs::SiteRecord::export_all();
        let _ = crate::structs::ProbeKind::export_all();
        let _ = crate::structs::Probe::export_all();
        let _ = crate::structs::ProbeOutput::export_all();
        let _ = crate::structs::NetworkTotals::export_all();
        let _ = crate::structs::NodeOutputEntry::export_all();
        let _ = crate::structs::NetworkReport::export_all();
    }
}
