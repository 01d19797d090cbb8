//! Finkern rewards - time-weighted staking reward accrual
//!
//! reward = staked_amount * reward_rate * elapsed / RATE_DENOMINATOR
//!
//! Rounds down. The remainder is forfeited, never carried to the next call,
//! so the pool can never mint more than the exact rate allows.

pub mod accrual;
pub mod state;

pub use accrual::*;
pub use state::*;
