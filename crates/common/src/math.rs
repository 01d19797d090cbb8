//! Checked integer arithmetic helpers - no floats, no wrapping, no panics
//!
//! Every multiply happens before the divide in `u128`, and every step is
//! checked. `what` names the quantity being computed and ends up in the
//! `ArithmeticOverflow` context.

use crate::error::{KernelError, Result};
use crate::types::{BPS_SCALE, PERCENT_SCALE};

/// `a * b / denom`, rounding DOWN
pub fn mul_div_down(a: u128, b: u128, denom: u128, what: &'static str) -> Result<u128> {
    if denom == 0 {
        return Err(KernelError::InvalidParameter("division by zero"));
    }
    let product = a.checked_mul(b).ok_or(KernelError::ArithmeticOverflow(what))?;
    Ok(product / denom)
}

/// `a * b / denom`, rounding UP
///
/// Used where rounding must favour the pool (exact-output quotes).
pub fn mul_div_up(a: u128, b: u128, denom: u128, what: &'static str) -> Result<u128> {
    if denom == 0 {
        return Err(KernelError::InvalidParameter("division by zero"));
    }
    let product = a.checked_mul(b).ok_or(KernelError::ArithmeticOverflow(what))?;
    let quotient = product / denom;
    if product % denom == 0 {
        Ok(quotient)
    } else {
        quotient.checked_add(1).ok_or(KernelError::ArithmeticOverflow(what))
    }
}

/// Narrow a `u128` intermediate back to a `u64` amount
pub fn to_u64(x: u128, what: &'static str) -> Result<u64> {
    u64::try_from(x).map_err(|_| KernelError::ArithmeticOverflow(what))
}

/// Checked `u64` add
pub fn add_u64(a: u64, b: u64, what: &'static str) -> Result<u64> {
    a.checked_add(b).ok_or(KernelError::ArithmeticOverflow(what))
}

/// Checked `u128` multiply
pub fn mul_u128(a: u128, b: u128, what: &'static str) -> Result<u128> {
    a.checked_mul(b).ok_or(KernelError::ArithmeticOverflow(what))
}

/// Integer square root, rounding down (Newton's method)
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // Initial guess 2^(ceil(bits/2)) is always >= sqrt(n)
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Reject basis-point values above 100%
pub fn check_bps(bps: u64, what: &'static str) -> Result<()> {
    if bps > BPS_SCALE {
        log::debug!("rejecting {}: {} bps exceeds {}", what, bps, BPS_SCALE);
        return Err(KernelError::InvalidParameter(what));
    }
    Ok(())
}

/// Reject whole-percent values above 100%
pub fn check_percent(percent: u64, what: &'static str) -> Result<()> {
    if percent > PERCENT_SCALE {
        log::debug!("rejecting {}: {}% exceeds {}", what, percent, PERCENT_SCALE);
        return Err(KernelError::InvalidParameter(what));
    }
    Ok(())
}
