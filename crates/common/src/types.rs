//! Shared scalar conventions
//!
//! Amounts, prices and timestamps are `u64`; every intermediate product is
//! taken in `u128`.

/// Token amount in the smallest indivisible unit
pub type Amount = u64;

/// Timestamp or duration in seconds, always caller supplied
pub type Timestamp = u64;

/// Basis points scale (10,000 bps = 100%)
pub const BPS_SCALE: u64 = 10_000;

/// Whole-percent scale (100 = 100%)
pub const PERCENT_SCALE: u64 = 100;

/// Fixed-point one for dimensionless fractions (1e9)
pub const FP_ONE: u64 = 1_000_000_000;

/// Price scale: quote units per whole base unit (1e6)
pub const PRICE_SCALE: u64 = 1_000_000;

/// Reward rate denominator (1e18)
///
/// A pool `reward_rate` of `RATE_DENOMINATOR` pays one reward unit per
/// staked unit per second.
pub const RATE_DENOMINATOR: u128 = 1_000_000_000_000_000_000;
