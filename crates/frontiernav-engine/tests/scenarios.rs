//! Scenario tests for the probe output engine.
//!
//! Each test builds a small network through [`ProbeNetwork`], installs
//! probes from the default catalog, and checks slot outputs and totals
//! against hand-computed figures.

// Scenario tests use unwrap extensively for clarity -- panicking on
// failure is the correct behavior in test code.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::missing_panics_doc
)]

use frontiernav_engine::{
    BoosterPolicy, EngineConfig, EngineError, ProbeLayout, ProbeNetwork, parse_site_table,
};
use frontiernav_types::{NodeId, ProbeOutput, ProbeType, ProductionRank, RevenueRank, SiteRecord};

// =========================================================================
// Helpers
// =========================================================================

fn id(code: &str) -> NodeId {
    NodeId::from(code)
}

fn site(code: &str, prod: ProductionRank, rev: RevenueRank, adjacent: &[&str]) -> SiteRecord {
    SiteRecord {
        id: id(code),
        name: format!("FN Site {code}"),
        region: String::from("Primordia"),
        production_rank: prod,
        revenue_rank: rev,
        combat_rank: String::from("B"),
        sightseeing: Vec::new(),
        rare_resources: Vec::new(),
        adjacent: adjacent.iter().map(|&a| id(a)).collect(),
    }
}

fn network(records: Vec<SiteRecord>) -> ProbeNetwork {
    ProbeNetwork::from_records(records, &EngineConfig::default()).unwrap()
}

fn network_with_policy(records: Vec<SiteRecord>, policy: BoosterPolicy) -> ProbeNetwork {
    let mut config = EngineConfig::default();
    config.booster.policy = policy;
    ProbeNetwork::from_records(records, &config).unwrap()
}

/// `n` rank-C sites in a line: s0 - s1 - ... - s(n-1).
fn path(n: usize) -> Vec<SiteRecord> {
    (0..n)
        .map(|i| {
            let next = format!("s{}", i + 1);
            let adjacent: Vec<&str> = if i + 1 < n { vec![next.as_str()] } else { Vec::new() };
            site(&format!("s{i}"), ProductionRank::C, RevenueRank::F, &adjacent)
        })
        .collect()
}

fn output(network: &ProbeNetwork, code: &str) -> ProbeOutput {
    network.compute_node_output(&id(code)).unwrap()
}

// =========================================================================
// Basic and locked slots
// =========================================================================

#[test]
fn basic_probe_yields_half_of_base_regardless_of_neighbors() {
    let mut net = network(vec![
        site("hub", ProductionRank::A, RevenueRank::S, &["b1", "m1", "d1"]),
        site("b1", ProductionRank::C, RevenueRank::F, &[]),
        site("m1", ProductionRank::C, RevenueRank::F, &[]),
        site("d1", ProductionRank::C, RevenueRank::F, &[]),
    ]);
    net.install_kind(&id("b1"), ProbeType::Booster, Some(2)).unwrap();
    net.install_kind(&id("m1"), ProbeType::Mining, Some(10)).unwrap();
    net.install_kind(&id("d1"), ProbeType::Duplicator, None).unwrap();

    let out = output(&net, "hub");
    assert_eq!(out.production, 250);
    assert_eq!(out.revenue, 425);
    assert_eq!(out.storage, 0);
    assert!(out.resources.is_empty());
}

#[test]
fn locked_slot_is_zero_whatever_surrounds_it() {
    let mut records = path(3);
    records[1].rare_resources = vec![String::from("Aurorite")];
    let mut net = network(records);
    net.install_kind(&id("s0"), ProbeType::Booster, Some(2)).unwrap();
    net.install_kind(&id("s2"), ProbeType::Mining, Some(1)).unwrap();
    net.lock(&id("s1")).unwrap();

    assert_eq!(output(&net, "s1"), ProbeOutput::zero());

    net.install_kind(&id("s2"), ProbeType::Duplicator, None).unwrap();
    assert_eq!(output(&net, "s1"), ProbeOutput::zero());
}

#[test]
fn locked_neighbor_contributes_nothing_to_a_duplicator() {
    let mut net = network(path(2));
    net.install_kind(&id("s0"), ProbeType::Duplicator, None).unwrap();
    net.lock(&id("s1")).unwrap();
    assert_eq!(output(&net, "s0"), ProbeOutput::zero());
}

// =========================================================================
// Link multiplier
// =========================================================================

#[test]
fn link_multiplier_follows_component_size_thresholds() {
    // Rank C production is 250; mining G1 multiplies by 1.0.
    let expected = [
        (1, 250),
        (2, 250),
        (3, 325),
        (4, 325),
        (5, 375),
        (7, 375),
        (8, 450),
        (10, 450),
    ];
    for (size, production) in expected {
        let mut net = network(path(size));
        for i in 0..size {
            net.install_kind(&id(&format!("s{i}")), ProbeType::Mining, Some(1))
                .unwrap();
        }
        assert_eq!(
            output(&net, "s0").production,
            production,
            "component of size {size}"
        );
    }
}

#[test]
fn links_require_matching_generation() {
    let mut net = network(path(3));
    net.install_kind(&id("s0"), ProbeType::Mining, Some(1)).unwrap();
    net.install_kind(&id("s1"), ProbeType::Mining, Some(2)).unwrap();
    net.install_kind(&id("s2"), ProbeType::Mining, Some(1)).unwrap();
    // s0 and s2 are not connected through a matching probe.
    assert_eq!(output(&net, "s0").production, 250);
}

#[test]
fn storage_probes_link_by_type() {
    let mut net = network(path(3));
    for code in ["s0", "s1", "s2"] {
        net.install_kind(&id(code), ProbeType::Storage, None).unwrap();
    }
    assert_eq!(output(&net, "s1").storage, 3900);
}

#[test]
fn triangle_of_mining_g5_probes() {
    let mut net = network(vec![
        site("a", ProductionRank::A, RevenueRank::F, &["b", "c"]),
        site("b", ProductionRank::B, RevenueRank::F, &["c"]),
        site("c", ProductionRank::C, RevenueRank::F, &["a"]),
    ]);
    for code in ["a", "b", "c"] {
        net.install_kind(&id(code), ProbeType::Mining, Some(5)).unwrap();
    }
    // base * 1.8 * 1.3
    assert_eq!(output(&net, "a").production, 1170);
    assert_eq!(output(&net, "b").production, 819);
    assert_eq!(output(&net, "c").production, 585);
}

// =========================================================================
// Idempotence and duplicators
// =========================================================================

#[test]
fn repeated_calculation_is_idempotent() {
    let mut net = network(vec![
        site("x", ProductionRank::A, RevenueRank::S, &["y", "z"]),
        site("y", ProductionRank::B, RevenueRank::C, &[]),
        site("z", ProductionRank::C, RevenueRank::A, &[]),
    ]);
    net.install_kind(&id("x"), ProbeType::Duplicator, None).unwrap();
    net.install_kind(&id("y"), ProbeType::Mining, Some(4)).unwrap();
    net.install_kind(&id("z"), ProbeType::Research, Some(2)).unwrap();

    let first = output(&net, "x");
    let second = output(&net, "x");
    assert_eq!(first, second);
    assert_eq!(net.graph().probe_at(&id("x")).unwrap().probe_type(), ProbeType::Duplicator);
}

#[test]
fn duplicator_mirrors_its_only_mining_neighbor() {
    let mut records = vec![
        site("x", ProductionRank::A, RevenueRank::C, &["y"]),
        site("y", ProductionRank::C, RevenueRank::D, &[]),
    ];
    records[0].rare_resources = vec![String::from("Arc Sand Ore"), String::from("Aurorite")];
    records[1].rare_resources = vec![String::from("Dawnstone")];
    let mut net = network(records);
    net.install_kind(&id("x"), ProbeType::Duplicator, None).unwrap();
    net.install_kind(&id("y"), ProbeType::Mining, Some(6)).unwrap();

    let mirrored_probe = net.graph().probe_at(&id("y")).unwrap().clone();
    let as_if = net.engine().output_as_if(&id("x"), &mirrored_probe).unwrap();
    let dup = output(&net, "x");

    assert_eq!(dup, as_if);
    // 500 * 2.0 and 550 * 0.3
    assert_eq!(dup.production, 1000);
    assert_eq!(dup.revenue, 165);
    assert_eq!(dup.resources.len(), 2);
}

#[test]
fn duplicator_carries_boosters_through_mirrored_output() {
    let mut net = network(vec![
        site("x", ProductionRank::A, RevenueRank::F, &["y", "b"]),
        site("y", ProductionRank::C, RevenueRank::F, &[]),
        site("b", ProductionRank::C, RevenueRank::F, &[]),
    ]);
    net.install_kind(&id("x"), ProbeType::Duplicator, None).unwrap();
    net.install_kind(&id("y"), ProbeType::Mining, Some(1)).unwrap();
    net.install_kind(&id("b"), ProbeType::Booster, Some(1)).unwrap();
    // Both mirrored copies are boosted by b: (500 * 1.0 + 500 * 0.1) * 1.5.
    assert_eq!(output(&net, "x").production, 825);
}

#[test]
fn duplicator_boosts_mirrored_basic_copy() {
    let mut net = network(vec![
        site("x", ProductionRank::A, RevenueRank::F, &["y", "b"]),
        site("y", ProductionRank::C, RevenueRank::F, &[]),
        site("b", ProductionRank::C, RevenueRank::F, &[]),
    ]);
    net.install_kind(&id("x"), ProbeType::Duplicator, None).unwrap();
    net.install_kind(&id("b"), ProbeType::Booster, Some(1)).unwrap();
    // y stays basic: (500 * 0.5 + 500 * 0.1) * 1.5.
    let out = output(&net, "x");
    assert_eq!(out.production, 450);
    // (200 * 0.5 + 200 * 0.1) * 1.5
    assert_eq!(out.revenue, 180);
}

// =========================================================================
// Research and storage
// =========================================================================

#[test]
fn research_sightseeing_replaces_rank_revenue() {
    let mut records = vec![site("r", ProductionRank::C, RevenueRank::S, &[])];
    records[0].sightseeing = vec![
        String::from("Millstone Ridge"),
        String::from("Skygazer's Atrium"),
    ];
    let mut net = network(records);
    net.install_kind(&id("r"), ProbeType::Research, Some(3)).unwrap();
    assert_eq!(output(&net, "r").revenue, 6000);
}

#[test]
fn single_storage_node_and_totals() {
    let mut net = network(vec![site("st", ProductionRank::B, RevenueRank::A, &[])]);
    net.install_kind(&id("st"), ProbeType::Storage, None).unwrap();

    let out = output(&net, "st");
    assert_eq!(out.production, 35);
    assert_eq!(out.revenue, 75);
    assert_eq!(out.storage, 3000);
    assert!(out.resources.is_empty());

    let totals = net.compute_totals().unwrap();
    assert_eq!(totals.storage_total, 9000);
    assert_eq!(totals.cost_total, 800);
}

// =========================================================================
// Booster policy
// =========================================================================

#[test]
fn booster_policy_changes_which_channels_rise() {
    let records = || {
        vec![
            site("r", ProductionRank::A, RevenueRank::S, &["b"]),
            site("b", ProductionRank::C, RevenueRank::F, &[]),
        ]
    };

    let mut flat = network_with_policy(records(), BoosterPolicy::Flat);
    let mut matched = network_with_policy(records(), BoosterPolicy::ChannelMatched);
    for net in [&mut flat, &mut matched] {
        net.install_kind(&id("r"), ProbeType::Research, Some(1)).unwrap();
        net.install_kind(&id("b"), ProbeType::Booster, Some(2)).unwrap();
    }

    // Research G1 at rank A / S: 250 production, 850 * 1.5 revenue.
    let flat_out = output(&flat, "r");
    assert_eq!(flat_out.production, 500);
    assert_eq!(flat_out.revenue, 2550);

    let matched_out = output(&matched, "r");
    assert_eq!(matched_out.production, 250);
    assert_eq!(matched_out.revenue, 2550);
}

#[test]
fn two_boosters_compound() {
    let mut net = network(vec![
        site("m", ProductionRank::C, RevenueRank::F, &["b1", "b2"]),
        site("b1", ProductionRank::C, RevenueRank::F, &[]),
        site("b2", ProductionRank::C, RevenueRank::F, &[]),
    ]);
    net.install_kind(&id("m"), ProbeType::Mining, Some(1)).unwrap();
    net.install_kind(&id("b1"), ProbeType::Booster, Some(1)).unwrap();
    net.install_kind(&id("b2"), ProbeType::Booster, Some(2)).unwrap();
    // 250 * 1.5 * 2.0
    assert_eq!(output(&net, "m").production, 750);
}

// =========================================================================
// Aggregation
// =========================================================================

#[test]
fn totals_are_recomputed_on_every_call() {
    let mut net = network(path(4));
    net.install_kind(&id("s1"), ProbeType::Mining, Some(2)).unwrap();
    let first = net.compute_totals().unwrap();
    let second = net.compute_totals().unwrap();
    assert_eq!(first, second);

    net.lock(&id("s1")).unwrap();
    let third = net.compute_totals().unwrap();
    assert!(third.production_total < first.production_total);
    assert_eq!(third.cost_total, 0);
}

#[test]
fn totals_union_resources() {
    let mut records = path(3);
    records[0].rare_resources = vec![String::from("Aurorite"), String::from("Dawnstone")];
    records[2].rare_resources = vec![String::from("Dawnstone"), String::from("Infernium")];
    let mut net = network(records);
    net.install_kind(&id("s0"), ProbeType::Mining, Some(1)).unwrap();
    net.install_kind(&id("s2"), ProbeType::Mining, Some(1)).unwrap();

    let totals = net.compute_totals().unwrap();
    let resources: Vec<&str> = totals.resources.iter().map(String::as_str).collect();
    assert_eq!(resources, vec!["Aurorite", "Dawnstone", "Infernium"]);
    assert_eq!(totals.cost_total, 200);
}

// =========================================================================
// Layouts
// =========================================================================

#[test]
fn layout_applies_installs_then_locks() {
    let records = parse_site_table(
        r"
sites:
  - id: fn105
    name: FN Site 105
    production_rank: A
    revenue_rank: F
    adjacent: [fn101, fn103]
  - id: fn101
    name: FN Site 101
    production_rank: C
    revenue_rank: S
  - id: fn103
    name: FN Site 103
    production_rank: C
    revenue_rank: E
",
    )
    .unwrap();
    let mut net = network(records);
    let layout = ProbeLayout::parse(
        r"
installs:
  - node: fn105
    probe_type: mining
    generation: 3
  - node: fn101
    probe_type: mining
    generation: 3
  - node: fn103
    probe_type: mining
    generation: 3
locked: [fn103]
",
    )
    .unwrap();
    layout.apply(&mut net).unwrap();

    assert_eq!(output(&net, "fn103"), ProbeOutput::zero());
    // fn105 links only with fn101: 500 * 1.4.
    assert_eq!(output(&net, "fn105").production, 700);

    let report = net.compute_report().unwrap();
    assert_eq!(report.nodes.len(), 3);
    assert_eq!(report.totals.cost_total, 700);
}

#[test]
fn layout_with_unknown_probe_type_fails() {
    let mut net = network(path(1));
    let layout = ProbeLayout::parse("installs:\n  - node: s0\n    probe_type: warp\n").unwrap();
    assert_eq!(
        layout.apply(&mut net),
        Err(EngineError::UnknownProbeType(String::from("warp")))
    );
}
