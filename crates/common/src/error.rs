//! Kernel error taxonomy

use thiserror::Error;

/// Errors returned by every kernel operation.
///
/// Identical inputs always produce the identical error; nothing here is
/// transient, so callers should surface these unchanged instead of retrying.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// A vesting/staking/pricing input violates a structural precondition
    #[error("invalid schedule: {0}")]
    InvalidSchedule(&'static str),

    /// A supplied `now` precedes a recorded start/stake time
    #[error("invalid time ordering: {0}")]
    InvalidTimeOrdering(&'static str),

    /// A rate, fee, or threshold is outside its defined domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// An operation requires non-zero reserves/stake and found zero
    #[error("empty pool: {0}")]
    EmptyPool(&'static str),

    /// A swap would exceed available reserves
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(&'static str),

    /// An intermediate product/sum exceeds the representable range
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),
}

/// Result alias used across all kernels
pub type Result<T> = core::result::Result<T, KernelError>;
