//! Network-wide aggregation.
//!
//! Totals are recomputed from scratch on every call; nothing is carried
//! between invocations.

use frontiernav_types::{NetworkReport, NetworkTotals, NodeOutputEntry, ProbeOutput};
use tracing::info;

use crate::error::EngineError;
use crate::output::OutputEngine;

/// Sum every slot's truncated output into network totals.
///
/// Storage starts from `starting_storage`. The cost total sums the
/// installation cost of every installed probe.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if a sum overflows.
pub fn compute_totals(
    engine: &OutputEngine<'_>,
    starting_storage: u64,
) -> Result<NetworkTotals, EngineError> {
    Ok(compute_report(engine, starting_storage)?.totals)
}

/// Per-site outputs in site-code order, plus the totals.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if a sum overflows.
pub fn compute_report(
    engine: &OutputEngine<'_>,
    starting_storage: u64,
) -> Result<NetworkReport, EngineError> {
    let graph = engine.graph();
    let mut totals = NetworkTotals {
        storage_total: starting_storage,
        ..NetworkTotals::default()
    };
    let mut nodes = Vec::with_capacity(graph.site_count());

    for site in graph.sites() {
        let output = engine.calculate_output(site.id())?;
        accumulate(&mut totals, &output)?;
        totals.cost_total = checked_add(totals.cost_total, u64::from(site.probe().cost))?;

        nodes.push(NodeOutputEntry {
            node: site.id().clone(),
            name: site.name().to_owned(),
            region: site.record.region.clone(),
            probe: site.probe().name.clone(),
            output,
        });
    }

    info!(
        sites = nodes.len(),
        production = totals.production_total,
        revenue = totals.revenue_total,
        storage = totals.storage_total,
        cost = totals.cost_total,
        resources = totals.resources.len(),
        "Network totals computed"
    );

    Ok(NetworkReport { nodes, totals })
}

fn accumulate(totals: &mut NetworkTotals, output: &ProbeOutput) -> Result<(), EngineError> {
    totals.production_total = checked_add(totals.production_total, output.production)?;
    totals.revenue_total = checked_add(totals.revenue_total, output.revenue)?;
    totals.storage_total = checked_add(totals.storage_total, output.storage)?;
    totals.resources.extend(output.resources.iter().cloned());
    Ok(())
}

const fn checked_add(a: u64, b: u64) -> Result<u64, EngineError> {
    match a.checked_add(b) {
        Some(sum) => Ok(sum),
        None => Err(EngineError::ArithmeticOverflow),
    }
}
