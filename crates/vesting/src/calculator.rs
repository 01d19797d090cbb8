//! Vesting calculator - vested, releasable and unvested amounts
//!
//! vested(t) = 0                                         if t < start + cliff
//!           = min(total, total * (t - start) / duration) otherwise

use finkern_common::{mul_div_down, to_u64, Amount, Result, Timestamp};

use crate::schedule::VestingSchedule;

/// Amount vested at `now`
///
/// Exactly zero before the cliff, linear from `start_time` afterwards,
/// clamped at `total_amount`.
pub fn vested_amount(schedule: &VestingSchedule, now: Timestamp) -> Result<Amount> {
    schedule.validate()?;

    let elapsed = match schedule.elapsed(now) {
        Some(elapsed) => elapsed,
        None => return Ok(0),
    };
    if elapsed < schedule.cliff_duration {
        return Ok(0);
    }
    if elapsed >= schedule.total_duration {
        return Ok(schedule.total_amount);
    }

    let vested = mul_div_down(
        schedule.total_amount as u128,
        elapsed as u128,
        schedule.total_duration as u128,
        "vested amount",
    )?;
    let vested = to_u64(vested, "vested amount")?.min(schedule.total_amount);

    log::trace!("vested {} of {} at t={}", vested, schedule.total_amount, now);
    Ok(vested)
}

/// Vested but not yet released, floored at zero
///
/// A stale `released_amount` larger than what is currently vested (clock
/// skew on the caller side) yields 0 rather than an error.
pub fn releasable_amount(schedule: &VestingSchedule, now: Timestamp) -> Result<Amount> {
    let vested = vested_amount(schedule, now)?;
    Ok(vested.saturating_sub(schedule.released_amount))
}

/// Not yet vested at `now`
pub fn unvested_amount(schedule: &VestingSchedule, now: Timestamp) -> Result<Amount> {
    let vested = vested_amount(schedule, now)?;
    Ok(schedule.total_amount - vested)
}

/// At least `total_duration` seconds have passed since `start_time`
pub fn is_fully_vested(schedule: &VestingSchedule, now: Timestamp) -> bool {
    schedule
        .elapsed(now)
        .map_or(false, |elapsed| elapsed >= schedule.total_duration)
}

/// Release everything currently releasable
///
/// Returns the advanced schedule and the amount released. The caller owns
/// persistence of the new `released_amount`.
pub fn release(schedule: &VestingSchedule, now: Timestamp) -> Result<(VestingSchedule, Amount)> {
    let amount = releasable_amount(schedule, now)?;
    let next = VestingSchedule {
        released_amount: schedule.released_amount + amount,
        ..*schedule
    };

    log::trace!(
        "released {} at t={} (total released {})",
        amount,
        now,
        next.released_amount
    );
    Ok((next, amount))
}
