//! Reward accrual and position bookkeeping
//!
//! All operations take `now` from the caller and return new values; a
//! position is never mutated in place.

use finkern_common::{
    add_u64, mul_div_down, to_u64, Amount, KernelError, Result, Timestamp, FP_ONE,
    RATE_DENOMINATOR,
};

use crate::state::{StakingPool, StakingPosition};

/// Reward earned since `position.staked_at`
///
/// `staked_amount * reward_rate * (now - staked_at) / RATE_DENOMINATOR`,
/// floored. A zero rate is legal and earns nothing.
pub fn accrue(position: &StakingPosition, pool: &StakingPool, now: Timestamp) -> Result<Amount> {
    if now < position.staked_at {
        log::debug!(
            "rejecting accrual: now={} precedes staked_at={}",
            now,
            position.staked_at
        );
        return Err(KernelError::InvalidTimeOrdering("now precedes staked_at"));
    }
    let elapsed = now - position.staked_at;

    // u64 * u64 always fits in u128; the third factor may not
    let per_second = position.staked_amount as u128 * pool.reward_rate as u128;
    let reward = mul_div_down(per_second, elapsed as u128, RATE_DENOMINATOR, "reward accrual")?;
    let reward = to_u64(reward, "reward accrual")?;

    log::trace!(
        "accrued {} over {}s on stake {}",
        reward,
        elapsed,
        position.staked_amount
    );
    Ok(reward)
}

/// Previously accrued plus newly accrued rewards
pub fn total_rewards(
    position: &StakingPosition,
    pool: &StakingPool,
    now: Timestamp,
) -> Result<Amount> {
    let delta = accrue(position, pool, now)?;
    add_u64(position.accrued_rewards, delta, "total rewards")
}

/// Position's fraction of the pool, scaled by `FP_ONE`
pub fn share_of_pool(position: &StakingPosition, pool: &StakingPool) -> Result<u64> {
    if pool.total_staked == 0 {
        return Err(KernelError::EmptyPool("total_staked is zero"));
    }
    if position.staked_amount > pool.total_staked {
        return Err(KernelError::InvalidParameter(
            "staked_amount exceeds pool total_staked",
        ));
    }

    let share = mul_div_down(
        position.staked_amount as u128,
        FP_ONE as u128,
        pool.total_staked as u128,
        "pool share",
    )?;
    to_u64(share, "pool share")
}

/// Fold pending rewards into `accrued_rewards` and restart the clock at `now`
pub fn checkpoint(
    position: &StakingPosition,
    pool: &StakingPool,
    now: Timestamp,
) -> Result<StakingPosition> {
    let accrued_rewards = total_rewards(position, pool, now)?;
    Ok(StakingPosition {
        staked_amount: position.staked_amount,
        staked_at: now,
        accrued_rewards,
    })
}

/// Pay out everything owed
///
/// Returns the position with zero accrued rewards and the amount claimed.
pub fn claim(
    position: &StakingPosition,
    pool: &StakingPool,
    now: Timestamp,
) -> Result<(StakingPosition, Amount)> {
    let owed = total_rewards(position, pool, now)?;
    let next = StakingPosition {
        staked_amount: position.staked_amount,
        staked_at: now,
        accrued_rewards: 0,
    };

    log::trace!("claimed {} at t={}", owed, now);
    Ok((next, owed))
}

/// Add `amount` to a position, checkpointing rewards at the old stake first
pub fn stake(
    pool: &StakingPool,
    position: &StakingPosition,
    amount: Amount,
    now: Timestamp,
) -> Result<(StakingPool, StakingPosition)> {
    if amount == 0 {
        return Err(KernelError::InvalidParameter("stake amount must be > 0"));
    }

    let mut next = checkpoint(position, pool, now)?;
    next.staked_amount = add_u64(next.staked_amount, amount, "staked amount")?;

    let next_pool = StakingPool {
        reward_rate: pool.reward_rate,
        total_staked: add_u64(pool.total_staked, amount, "pool total_staked")?,
    };

    Ok((next_pool, next))
}

/// Remove `amount` from a position, checkpointing rewards at the old stake first
pub fn unstake(
    pool: &StakingPool,
    position: &StakingPosition,
    amount: Amount,
    now: Timestamp,
) -> Result<(StakingPool, StakingPosition)> {
    if amount == 0 {
        return Err(KernelError::InvalidParameter("unstake amount must be > 0"));
    }
    if amount > position.staked_amount {
        return Err(KernelError::InvalidParameter(
            "unstake amount exceeds staked_amount",
        ));
    }
    let total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(KernelError::InvalidParameter(
            "unstake amount exceeds pool total_staked",
        ))?;

    let mut next = checkpoint(position, pool, now)?;
    next.staked_amount -= amount;

    let next_pool = StakingPool {
        reward_rate: pool.reward_rate,
        total_staked,
    };

    Ok((next_pool, next))
}
