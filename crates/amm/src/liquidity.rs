//! LP share minting and redemption
//!
//! First deposit into a pool with no LP supply mints the geometric mean of
//! the two amounts, `⌊√(a·b)⌋`. Later deposits mint in proportion to the
//! scarcer side, so donating the excess of one asset never dilutes holders.

use finkern_common::{add_u64, isqrt, mul_div_down, to_u64, Amount, KernelError, Result};

use crate::state::LiquidityPool;

/// LP tokens minted for depositing `amount_a` and `amount_b`
///
/// - lp_supply == 0: `⌊√(amount_a · amount_b)⌋`
/// - otherwise: `min(lp_supply · a / reserve_a, lp_supply · b / reserve_b)`
pub fn mint_lp_amount(pool: &LiquidityPool, amount_a: Amount, amount_b: Amount) -> Result<Amount> {
    if amount_a == 0 || amount_b == 0 {
        return Err(KernelError::InvalidParameter(
            "deposit amounts must both be > 0",
        ));
    }

    if pool.lp_supply == 0 {
        // √(u64 · u64) always fits in u64
        let minted = isqrt(amount_a as u128 * amount_b as u128);
        return to_u64(minted, "initial LP amount");
    }

    if pool.reserve_a == 0 || pool.reserve_b == 0 {
        return Err(KernelError::EmptyPool(
            "LP supply outstanding against zero reserves",
        ));
    }

    let by_a = mul_div_down(
        pool.lp_supply as u128,
        amount_a as u128,
        pool.reserve_a as u128,
        "LP amount for asset A",
    )?;
    let by_b = mul_div_down(
        pool.lp_supply as u128,
        amount_b as u128,
        pool.reserve_b as u128,
        "LP amount for asset B",
    )?;

    to_u64(by_a.min(by_b), "LP amount")
}

/// Deposit both assets, returning the updated pool and LP tokens minted
pub fn apply_deposit(
    pool: &LiquidityPool,
    amount_a: Amount,
    amount_b: Amount,
) -> Result<(LiquidityPool, Amount)> {
    let minted = mint_lp_amount(pool, amount_a, amount_b)?;
    if minted == 0 {
        return Err(KernelError::InvalidParameter(
            "deposit too small to mint LP tokens",
        ));
    }

    let next = LiquidityPool {
        reserve_a: add_u64(pool.reserve_a, amount_a, "reserve_a after deposit")?,
        reserve_b: add_u64(pool.reserve_b, amount_b, "reserve_b after deposit")?,
        fee_basis_points: pool.fee_basis_points,
        lp_supply: add_u64(pool.lp_supply, minted, "lp_supply after deposit")?,
    };

    log::trace!(
        "deposit {}/{} minted {} LP (supply {})",
        amount_a,
        amount_b,
        minted,
        next.lp_supply
    );
    Ok((next, minted))
}

/// Reserves redeemed for burning `lp_tokens`, floored
pub fn burn_lp_amount(pool: &LiquidityPool, lp_tokens: Amount) -> Result<(Amount, Amount)> {
    if lp_tokens == 0 {
        return Err(KernelError::InvalidParameter("lp_tokens must be > 0"));
    }
    if pool.lp_supply == 0 {
        return Err(KernelError::EmptyPool("no LP supply outstanding"));
    }
    if lp_tokens > pool.lp_supply {
        return Err(KernelError::InvalidParameter(
            "lp_tokens exceeds lp_supply",
        ));
    }

    let out_a = mul_div_down(
        pool.reserve_a as u128,
        lp_tokens as u128,
        pool.lp_supply as u128,
        "redeemed asset A",
    )?;
    let out_b = mul_div_down(
        pool.reserve_b as u128,
        lp_tokens as u128,
        pool.lp_supply as u128,
        "redeemed asset B",
    )?;

    // lp_tokens <= lp_supply keeps both under their reserves
    Ok((
        to_u64(out_a, "redeemed asset A")?,
        to_u64(out_b, "redeemed asset B")?,
    ))
}

/// Burn `lp_tokens`, returning the updated pool and both redeemed amounts
pub fn apply_withdraw(
    pool: &LiquidityPool,
    lp_tokens: Amount,
) -> Result<(LiquidityPool, Amount, Amount)> {
    let (out_a, out_b) = burn_lp_amount(pool, lp_tokens)?;

    let next = LiquidityPool {
        reserve_a: pool.reserve_a - out_a,
        reserve_b: pool.reserve_b - out_b,
        fee_basis_points: pool.fee_basis_points,
        lp_supply: pool.lp_supply - lp_tokens,
    };

    log::trace!(
        "withdraw {} LP -> {}/{} (supply {})",
        lp_tokens,
        out_a,
        out_b,
        next.lp_supply
    );
    Ok((next, out_a, out_b))
}
