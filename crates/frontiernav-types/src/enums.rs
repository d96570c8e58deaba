//! Enumeration types for the FrontierNav probe network.
//!
//! Ranks are tagged enums mapped to a fixed table of base rates, and
//! [`ProbeType`] is the closed set of installable probe families.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Site ranks
// ---------------------------------------------------------------------------

/// In-game production rank of a site. Each tier maps to a base miranium
/// rate per collection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ProductionRank {
    /// 500 miranium.
    A,
    /// 350 miranium.
    B,
    /// 250 miranium.
    C,
}

impl ProductionRank {
    /// Base production rate for this rank.
    pub const fn base_rate(self) -> u32 {
        match self {
            Self::A => 500,
            Self::B => 350,
            Self::C => 250,
        }
    }
}

/// In-game revenue rank of a site. Each tier maps to a base credit rate
/// per collection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RevenueRank {
    /// 850 credits.
    S,
    /// 750 credits.
    A,
    /// 650 credits.
    B,
    /// 550 credits.
    C,
    /// 450 credits.
    D,
    /// 300 credits.
    E,
    /// 200 credits.
    F,
}

impl RevenueRank {
    /// Base revenue rate for this rank.
    pub const fn base_rate(self) -> u32 {
        match self {
            Self::S => 850,
            Self::A => 750,
            Self::B => 650,
            Self::C => 550,
            Self::D => 450,
            Self::E => 300,
            Self::F => 200,
        }
    }
}

// ---------------------------------------------------------------------------
// Probes
// ---------------------------------------------------------------------------

/// One of the three amounts a probe slot yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Channel {
    /// Miranium production.
    Production,
    /// Credit revenue.
    Revenue,
    /// Miranium storage capacity.
    Storage,
}

/// The family of an installable probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ProbeType {
    /// Default probe present on every unlocked site.
    Basic,
    /// Raises production and can turn up rare resources. Generations 1-10.
    Mining,
    /// Raises revenue, or cashes in sightseeing spots. Generations 1-6.
    Research,
    /// Boosts the output of adjacent probes. Generations 1-2.
    Booster,
    /// Mirrors the output of adjacent probes.
    Duplicator,
    /// Adds storage capacity.
    Storage,
    /// Supports ground combat; negligible output.
    Combat,
    /// Sentinel for a slot that has not been unlocked yet.
    Locked,
}

impl ProbeType {
    /// Every probe type, in catalog order.
    pub const ALL: [Self; 8] = [
        Self::Basic,
        Self::Mining,
        Self::Research,
        Self::Booster,
        Self::Duplicator,
        Self::Storage,
        Self::Combat,
        Self::Locked,
    ];

    /// The lowercase tag used in configuration and layout files.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Mining => "mining",
            Self::Research => "research",
            Self::Booster => "booster",
            Self::Duplicator => "duplicator",
            Self::Storage => "storage",
            Self::Combat => "combat",
            Self::Locked => "locked",
        }
    }

    /// Capitalised label used to build display names.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Mining => "Mining",
            Self::Research => "Research",
            Self::Booster => "Booster",
            Self::Duplicator => "Duplicator",
            Self::Storage => "Storage",
            Self::Combat => "Combat",
            Self::Locked => "Locked",
        }
    }

    /// Whether adjacent booster probes raise this probe's output.
    pub const fn receives_booster_bonus(self) -> bool {
        !matches!(self, Self::Basic | Self::Booster | Self::Combat | Self::Locked)
    }

    /// Whether a connected chain of identical probes multiplies this
    /// probe's output.
    pub const fn receives_link_multiplier(self) -> bool {
        matches!(self, Self::Mining | Self::Research | Self::Duplicator | Self::Storage)
    }

    /// The channel a channel-matched booster raises, if any.
    ///
    /// Duplicators have no channel of their own; they inherit the channel of
    /// whatever probe they mirror.
    pub const fn primary_channel(self) -> Option<Channel> {
        match self {
            Self::Mining => Some(Channel::Production),
            Self::Research => Some(Channel::Revenue),
            Self::Storage => Some(Channel::Storage),
            Self::Basic | Self::Booster | Self::Duplicator | Self::Combat | Self::Locked => None,
        }
    }
}

impl core::fmt::Display for ProbeType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A probe type tag that names no known [`ProbeType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown probe type: {0:?}")]
pub struct UnknownProbeType(pub String);

impl FromStr for ProbeType {
    type Err = UnknownProbeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.tag() == tag)
            .ok_or_else(|| UnknownProbeType(s.to_owned()))
    }
}
