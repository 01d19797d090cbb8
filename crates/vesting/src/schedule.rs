//! Vesting schedule value type

use finkern_common::{Amount, KernelError, Result, Timestamp};

/// Linear vesting schedule
///
/// All times share one unit (seconds). The schedule is a plain value: the
/// calculator never mutates it and returns a new schedule from `release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VestingSchedule {
    /// Total tokens granted, in the smallest unit
    pub total_amount: Amount,

    /// Vesting clock start
    pub start_time: Timestamp,

    /// Nothing is releasable until `start_time + cliff_duration`
    pub cliff_duration: Timestamp,

    /// Everything is vested at `start_time + total_duration`
    pub total_duration: Timestamp,

    /// Tokens already paid out
    pub released_amount: Amount,
}

impl VestingSchedule {
    /// Create a fresh schedule with nothing released
    pub fn new(
        total_amount: Amount,
        start_time: Timestamp,
        cliff_duration: Timestamp,
        total_duration: Timestamp,
    ) -> Result<Self> {
        let schedule = Self {
            total_amount,
            start_time,
            cliff_duration,
            total_duration,
            released_amount: 0,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Same schedule with a caller-tracked `released_amount`
    pub fn with_released(self, released_amount: Amount) -> Result<Self> {
        let schedule = Self {
            released_amount,
            ..self
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Structural checks shared by every operation
    pub fn validate(&self) -> Result<()> {
        if self.total_duration == 0 {
            return Err(KernelError::InvalidSchedule("total_duration must be > 0"));
        }
        if self.cliff_duration > self.total_duration {
            return Err(KernelError::InvalidSchedule(
                "cliff_duration exceeds total_duration",
            ));
        }
        if self.released_amount > self.total_amount {
            return Err(KernelError::InvalidSchedule(
                "released_amount exceeds total_amount",
            ));
        }
        Ok(())
    }

    /// Seconds since `start_time`, `None` before the clock starts
    pub fn elapsed(&self, now: Timestamp) -> Option<Timestamp> {
        now.checked_sub(self.start_time)
    }

    /// First instant at which anything is vested
    ///
    /// `None` when the cliff lies beyond the last representable timestamp.
    pub fn cliff_end(&self) -> Option<Timestamp> {
        self.start_time.checked_add(self.cliff_duration)
    }

    /// First instant at which everything is vested, `None` past `u64::MAX`
    pub fn vesting_end(&self) -> Option<Timestamp> {
        self.start_time.checked_add(self.total_duration)
    }
}
