//! Per-slot output calculation.
//!
//! The [`OutputEngine`] evaluates what one site's installed probe yields:
//! production, revenue, storage and the set of rare resources it may turn
//! up. Evaluation runs in three stages:
//!
//! 1. **Base output** from the probe type, generation and the site's ranks.
//!    A duplicator's base output is the sum of what each adjacent
//!    non-duplicator probe would yield if it were installed here instead.
//! 2. **Booster bonus** from every adjacent booster, compounding. A
//!    duplicator boosts each mirrored copy, so boosters around it count
//!    even when the copy is of a basic or support probe.
//! 3. **Link multiplier** from the size of the probe's link group.
//!
//! Evaluation is pure: "as if" evaluations take the hypothetical probe as
//! an argument instead of swapping it into the slot, so nothing needs to be
//! restored afterwards.

use std::collections::BTreeSet;

use frontiernav_graph::{Site, SiteGraph};
use frontiernav_types::{Channel, NodeId, Probe, ProbeOutput, ProbeType};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::config::BoosterPolicy;
use crate::error::EngineError;
use crate::links;
use crate::rates;

const CHANNELS: [Channel; 3] = [Channel::Production, Channel::Revenue, Channel::Storage];

/// Untruncated output of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    /// Miranium produced.
    pub production: Decimal,
    /// Credits earned.
    pub revenue: Decimal,
    /// Storage capacity added.
    pub storage: Decimal,
    /// Rare resources that may turn up.
    pub resources: BTreeSet<String>,
}

impl RawOutput {
    /// All-zero output.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The amount in one channel.
    pub const fn channel(&self, channel: Channel) -> Decimal {
        match channel {
            Channel::Production => self.production,
            Channel::Revenue => self.revenue,
            Channel::Storage => self.storage,
        }
    }

    const fn channel_mut(&mut self, channel: Channel) -> &mut Decimal {
        match channel {
            Channel::Production => &mut self.production,
            Channel::Revenue => &mut self.revenue,
            Channel::Storage => &mut self.storage,
        }
    }

    /// Multiply one channel by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ArithmeticOverflow`] on overflow.
    pub fn scale_channel(&mut self, channel: Channel, factor: Decimal) -> Result<(), EngineError> {
        let amount = self.channel_mut(channel);
        *amount = amount
            .checked_mul(factor)
            .ok_or(EngineError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Multiply every channel by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ArithmeticOverflow`] on overflow.
    pub fn scale(&mut self, factor: Decimal) -> Result<(), EngineError> {
        for channel in CHANNELS {
            self.scale_channel(channel, factor)?;
        }
        Ok(())
    }

    /// Add another output's amounts to this one. Resources are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ArithmeticOverflow`] on overflow.
    pub fn add_amounts(&mut self, other: &Self) -> Result<(), EngineError> {
        for channel in CHANNELS {
            let amount = self.channel_mut(channel);
            *amount = amount
                .checked_add(other.channel(channel))
                .ok_or(EngineError::ArithmeticOverflow)?;
        }
        Ok(())
    }

    /// Truncate every amount toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ArithmeticOverflow`] if an amount does not
    /// fit a `u64`.
    pub fn truncate(&self) -> Result<ProbeOutput, EngineError> {
        Ok(ProbeOutput {
            production: whole(self.production)?,
            revenue: whole(self.revenue)?,
            storage: whole(self.storage)?,
            resources: self.resources.clone(),
        })
    }
}

fn whole(amount: Decimal) -> Result<u64, EngineError> {
    amount
        .trunc()
        .to_u64()
        .ok_or(EngineError::ArithmeticOverflow)
}

fn mul(amount: Decimal, factor: Decimal) -> Result<Decimal, EngineError> {
    amount
        .checked_mul(factor)
        .ok_or(EngineError::ArithmeticOverflow)
}

/// Whether an evaluation is for the installed probe or for a probe a
/// duplicator mirrors. Mirrored evaluations never mirror again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Depth {
    Installed,
    Mirrored,
}

/// Evaluates slot outputs over a borrowed graph.
#[derive(Debug, Clone, Copy)]
pub struct OutputEngine<'a> {
    graph: &'a SiteGraph,
    booster_policy: BoosterPolicy,
}

impl<'a> OutputEngine<'a> {
    /// Create an engine over `graph`.
    pub const fn new(graph: &'a SiteGraph, booster_policy: BoosterPolicy) -> Self {
        Self {
            graph,
            booster_policy,
        }
    }

    /// The graph being evaluated.
    pub const fn graph(&self) -> &'a SiteGraph {
        self.graph
    }

    /// Output of the probe installed at `node`, truncated to whole units.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Graph`] if `node` is unknown, or
    /// [`EngineError::ArithmeticOverflow`] on overflow.
    pub fn calculate_output(&self, node: &NodeId) -> Result<ProbeOutput, EngineError> {
        let site = self.graph.require_site(node)?;
        let output = self.evaluate(site, site.probe(), Depth::Installed)?.truncate()?;
        debug!(
            node = %node,
            probe = %site.probe().kind,
            production = output.production,
            revenue = output.revenue,
            storage = output.storage,
            "Slot output calculated"
        );
        Ok(output)
    }

    /// Output `probe` would yield if it were installed at `node`, leaving
    /// the slot untouched.
    ///
    /// # Errors
    ///
    /// Same as [`OutputEngine::calculate_output`].
    pub fn output_as_if(&self, node: &NodeId, probe: &Probe) -> Result<ProbeOutput, EngineError> {
        let site = self.graph.require_site(node)?;
        self.evaluate(site, probe, Depth::Installed)?.truncate()
    }

    /// Untruncated output of the probe installed at `node`.
    ///
    /// # Errors
    ///
    /// Same as [`OutputEngine::calculate_output`].
    pub fn raw_output(&self, node: &NodeId) -> Result<RawOutput, EngineError> {
        let site = self.graph.require_site(node)?;
        self.evaluate(site, site.probe(), Depth::Installed)
    }

    fn evaluate(&self, site: &Site, probe: &Probe, depth: Depth) -> Result<RawOutput, EngineError> {
        let probe_type = probe.probe_type();
        if probe_type == ProbeType::Locked {
            return Ok(RawOutput::zero());
        }

        let mut output = if probe_type == ProbeType::Duplicator {
            self.mirror_neighbors(site, depth)?
        } else {
            base_output(site, probe)?
        };

        // Duplicators boost each mirrored copy in `mirror_neighbors`, and
        // copies are not boosted on their own.
        if depth == Depth::Installed
            && probe_type.receives_booster_bonus()
            && probe_type != ProbeType::Duplicator
        {
            self.apply_boosters(site, probe_type.primary_channel(), &mut output)?;
        }

        if probe_type.receives_link_multiplier() {
            let links = links::count_links(self.graph, site.id(), probe.kind)?;
            let multiplier = rates::link_multiplier(links);
            if multiplier != Decimal::ONE {
                debug!(node = %site.id(), probe = %probe.kind, links, %multiplier, "Link multiplier applied");
            }
            output.scale(multiplier)?;
        }

        Ok(output)
    }

    /// Sum of what every adjacent non-duplicator probe would yield here,
    /// raised by the boosters around this site.
    ///
    /// Each copy is boosted on the mirrored probe's primary channel under
    /// [`BoosterPolicy::ChannelMatched`], or on every channel when that
    /// probe has none. Rare resources come from the first adjacent mining
    /// probe that turns any up.
    fn mirror_neighbors(&self, site: &Site, depth: Depth) -> Result<RawOutput, EngineError> {
        if depth == Depth::Mirrored {
            warn!(node = %site.id(), "Refusing to mirror from inside a mirrored evaluation");
            return Ok(RawOutput::zero());
        }

        let mut total = RawOutput::zero();
        for neighbor in self.graph.adjacent_nodes(site.id())? {
            let mirrored = neighbor.probe();
            if mirrored.is(ProbeType::Duplicator) {
                continue;
            }
            let mut copy = self.evaluate(site, mirrored, Depth::Mirrored)?;
            self.apply_boosters(site, mirrored.probe_type().primary_channel(), &mut copy)?;
            total.add_amounts(&copy)?;
            if total.resources.is_empty() && mirrored.is(ProbeType::Mining) {
                total.resources = copy.resources;
            }
        }
        Ok(total)
    }

    /// Raise `output` once per adjacent booster.
    ///
    /// `channel` is the channel a channel-matched booster raises; `None`
    /// raises every channel.
    fn apply_boosters(
        &self,
        site: &Site,
        channel: Option<Channel>,
        output: &mut RawOutput,
    ) -> Result<(), EngineError> {
        for neighbor in self.graph.adjacent_nodes(site.id())? {
            let booster = neighbor.probe();
            if !booster.is(ProbeType::Booster) {
                continue;
            }
            let factor = Decimal::ONE
                .checked_add(rates::booster_fraction(booster.generation()))
                .ok_or(EngineError::ArithmeticOverflow)?;
            match (self.booster_policy, channel) {
                (BoosterPolicy::ChannelMatched, Some(channel)) => {
                    output.scale_channel(channel, factor)?;
                }
                (BoosterPolicy::Flat, _) | (BoosterPolicy::ChannelMatched, None) => {
                    output.scale(factor)?;
                }
            }
        }
        Ok(())
    }
}

/// Output of a non-duplicator probe at `site` before bonuses.
fn base_output(site: &Site, probe: &Probe) -> Result<RawOutput, EngineError> {
    let production = Decimal::from(site.production_base());
    let revenue = Decimal::from(site.revenue_base());
    let generation = probe.kind.generation_or_zero();
    let mut output = RawOutput::zero();

    match probe.probe_type() {
        ProbeType::Basic => {
            output.production = mul(production, rates::BASIC_SHARE)?;
            output.revenue = mul(revenue, rates::BASIC_SHARE)?;
        }
        ProbeType::Combat | ProbeType::Booster => {
            output.production = mul(production, rates::SUPPORT_SHARE)?;
            output.revenue = mul(revenue, rates::SUPPORT_SHARE)?;
        }
        ProbeType::Storage => {
            output.production = mul(production, rates::SUPPORT_SHARE)?;
            output.revenue = mul(revenue, rates::SUPPORT_SHARE)?;
            output.storage = Decimal::from(rates::STORAGE_PROBE_CAPACITY);
        }
        ProbeType::Mining => {
            output.production = mul(production, rates::mining_multiplier(generation))?;
            output.revenue = mul(revenue, rates::MINING_REVENUE_SHARE)?;
            output.resources = site.record.rare_resources.iter().cloned().collect();
        }
        ProbeType::Research => {
            output.production = mul(production, rates::RESEARCH_PRODUCTION_SHARE)?;
            output.revenue = if site.record.sightseeing.is_empty() {
                mul(revenue, rates::research_multiplier(generation))?
            } else {
                sightseeing_revenue(site.record.sightseeing.len(), generation)?
            };
        }
        // Locked is handled before evaluation and duplicators mirror.
        ProbeType::Locked | ProbeType::Duplicator => {}
    }

    Ok(output)
}

/// `spots * 500 * (generation + 3)`, replacing rank-based research revenue.
fn sightseeing_revenue(spots: usize, generation: u8) -> Result<Decimal, EngineError> {
    let spots = u64::try_from(spots).map_err(|_overflow| EngineError::ArithmeticOverflow)?;
    let step = u32::from(generation)
        .checked_add(rates::SIGHTSEEING_GENERATION_OFFSET)
        .ok_or(EngineError::ArithmeticOverflow)?;
    mul(
        mul(Decimal::from(spots), Decimal::from(rates::SIGHTSEEING_CREDITS))?,
        Decimal::from(step),
    )
}
