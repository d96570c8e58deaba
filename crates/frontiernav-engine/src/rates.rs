//! Fixed rates and multiplier curves used by the output engine.
//!
//! All values are exact [`Decimal`]s so that products such as
//! `250 * 1.8 * 1.3` land on whole numbers instead of `584.999...`.

use rust_decimal::Decimal;

/// Share of the site's base rates a basic probe yields (50%).
pub const BASIC_SHARE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Share of the site's base rates a support probe (combat, booster,
/// storage) yields (10%).
pub const SUPPORT_SHARE: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Share of the site's base revenue a mining probe yields (30%).
pub const MINING_REVENUE_SHARE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

/// Share of the site's base production a research probe yields (50%).
pub const RESEARCH_PRODUCTION_SHARE: Decimal = BASIC_SHARE;

/// Storage capacity added by a storage probe.
pub const STORAGE_PROBE_CAPACITY: u32 = 3000;

/// Credits per sightseeing spot per research-generation step.
pub const SIGHTSEEING_CREDITS: u32 = 500;

/// Offset added to the research generation in the sightseeing formula.
pub const SIGHTSEEING_GENERATION_OFFSET: u32 = 3;

/// Production multiplier of a mining probe.
///
/// Generations 1-8 follow `1 + 0.2 * (gen - 1)`. Generation 9 adds an extra
/// 0.1 (`1.1 + 0.2 * 8`) and generation 10 an extra 0.2 (`1.2 + 0.2 * 9`).
/// Generation 0 (no generation) yields 1.0 and anything above 10 caps at 3.0.
pub const fn mining_multiplier(generation: u8) -> Decimal {
    match generation {
        0 | 1 => Decimal::ONE,
        2 => Decimal::from_parts(12, 0, 0, false, 1),
        3 => Decimal::from_parts(14, 0, 0, false, 1),
        4 => Decimal::from_parts(16, 0, 0, false, 1),
        5 => Decimal::from_parts(18, 0, 0, false, 1),
        6 => Decimal::from_parts(20, 0, 0, false, 1),
        7 => Decimal::from_parts(22, 0, 0, false, 1),
        8 => Decimal::from_parts(24, 0, 0, false, 1),
        9 => Decimal::from_parts(27, 0, 0, false, 1),
        _ => Decimal::from_parts(30, 0, 0, false, 1),
    }
}

/// Revenue multiplier of a research probe.
///
/// Generations up to 1 yield 1.5, generations 2-6 follow `0.5 * (gen + 3)`,
/// and anything above 6 caps at 4.5.
pub const fn research_multiplier(generation: u8) -> Decimal {
    match generation {
        0 | 1 => Decimal::from_parts(15, 0, 0, false, 1),
        2 => Decimal::from_parts(25, 0, 0, false, 1),
        3 => Decimal::from_parts(30, 0, 0, false, 1),
        4 => Decimal::from_parts(35, 0, 0, false, 1),
        5 => Decimal::from_parts(40, 0, 0, false, 1),
        _ => Decimal::from_parts(45, 0, 0, false, 1),
    }
}

/// Multiplier granted by a linked group of `links` identical probes
/// (the group includes the probe itself).
pub const fn link_multiplier(links: usize) -> Decimal {
    match links {
        0..=2 => Decimal::ONE,
        3..=4 => Decimal::from_parts(13, 0, 0, false, 1),
        5..=7 => Decimal::from_parts(15, 0, 0, false, 1),
        _ => Decimal::from_parts(18, 0, 0, false, 1),
    }
}

/// Fraction of a probe's running output an adjacent booster adds.
///
/// G1 adds 50%, G2 adds 100%. A booster without a known generation adds
/// nothing.
pub const fn booster_fraction(generation: Option<u8>) -> Decimal {
    match generation {
        Some(1) => Decimal::from_parts(5, 0, 0, false, 1),
        Some(2) => Decimal::ONE,
        _ => Decimal::ZERO,
    }
}
