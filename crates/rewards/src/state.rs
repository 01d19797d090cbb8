//! Staking pool and position values

use finkern_common::{Amount, Timestamp};

/// Pool-wide staking parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StakingPool {
    /// Reward units per staked unit per second, scaled by `RATE_DENOMINATOR`
    pub reward_rate: u64,

    /// Sum of all positions' `staked_amount`
    pub total_staked: Amount,
}

/// A single staker's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StakingPosition {
    pub staked_amount: Amount,

    /// Accrual clock start; reset on every checkpoint
    pub staked_at: Timestamp,

    /// Rewards folded in by earlier checkpoints and not yet claimed
    pub accrued_rewards: Amount,
}

impl StakingPool {
    pub fn new(reward_rate: u64) -> Self {
        Self {
            reward_rate,
            total_staked: 0,
        }
    }
}

impl StakingPosition {
    pub fn new(staked_amount: Amount, staked_at: Timestamp) -> Self {
        Self {
            staked_amount,
            staked_at,
            accrued_rewards: 0,
        }
    }
}
