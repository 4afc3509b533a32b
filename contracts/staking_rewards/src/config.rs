//! Bounded protocol parameters.

pub use common::fixed_point::SCALE;

/// Lowest accepted reward rate, in reward units per tick.
pub const MIN_RATE: i128 = 1;
/// Highest accepted reward rate, in reward units per tick.
pub const MAX_RATE: i128 = 1_000 * SCALE;

/// Basis-point denominator for the claim fee.
pub const FEE_DENOMINATOR: i128 = 10_000;
/// Highest accepted claim fee (10 %).
pub const MAX_FEE_BPS: u32 = 1_000;

/// Multiplier that leaves a reward unchanged (percent).
pub const NEUTRAL_BOOST: u32 = 100;
/// Upper bound for the configurable boost cap (percent).
pub const BOOST_CEILING: u32 = 500;

/// Contract version without the boost overlay.
pub const VERSION_BASE: u32 = 1;
/// Contract version with the boost overlay.
pub const VERSION_BOOSTED: u32 = 2;
