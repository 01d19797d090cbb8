//! Finkern vesting - linear token release with an optional cliff
//!
//! Key properties:
//! - Nothing vests before `start_time + cliff_duration` (a cliff, not a ramp)
//! - After the cliff, vesting is linear from `start_time`, not from the cliff
//! - Vested amount is clamped at `total_amount`, however far `now` runs
//! - `released_amount` only ever moves forward

pub mod calculator;
pub mod schedule;

pub use calculator::*;
pub use schedule::*;
