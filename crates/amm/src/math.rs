//! Constant product AMM math (x·y=k)

use finkern_common::{
    add_u64, check_bps, mul_div_down, mul_div_up, to_u64, Amount, KernelError, Result, BPS_SCALE,
    PRICE_SCALE,
};

use crate::state::{LiquidityPool, SwapDirection};

fn check_reserves(reserve_in: Amount, reserve_out: Amount) -> Result<()> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(KernelError::EmptyPool("pool reserves are zero"));
    }
    Ok(())
}

/// Input left after the fee: `amount_in * (10000 - fee) / 10000`
fn effective_input(amount_in: Amount, fee_bps: u64) -> Result<u128> {
    mul_div_down(
        amount_in as u128,
        (BPS_SCALE - fee_bps) as u128,
        BPS_SCALE as u128,
        "fee-adjusted input",
    )
}

/// Fee retained by the pool on an input of `amount_in`
pub fn swap_fee(amount_in: Amount, fee_bps: u64) -> Result<Amount> {
    check_bps(fee_bps, "fee_basis_points must be in [0, 10000]")?;
    let effective = effective_input(amount_in, fee_bps)?;
    to_u64(amount_in as u128 - effective, "swap fee")
}

/// Output for selling `amount_in` into the pool
///
/// With fee on input:
/// - Δin_net = Δin * (1 - fee)
/// - Invariant: x0·y0 = (x0 + Δin_net)·(y0 - Δout)
/// - Δout = y0 · Δin_net / (x0 + Δin_net)
pub fn quote_output(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
    fee_bps: u64,
) -> Result<Amount> {
    check_bps(fee_bps, "fee_basis_points must be in [0, 10000]")?;
    check_reserves(reserve_in, reserve_out)?;
    if amount_in == 0 {
        return Err(KernelError::InvalidParameter("amount_in must be > 0"));
    }

    let dx_net = effective_input(amount_in, fee_bps)?;

    // x1 = x0 + Δin_net (u64 + u64 fits in u128)
    let x1 = reserve_in as u128 + dx_net;
    let dy_out = mul_div_down(reserve_out as u128, dx_net, x1, "swap output")?;

    // dy_out < y0 because dx_net < x1
    to_u64(dy_out, "swap output")
}

/// Input needed to buy exactly `amount_out` from the pool
///
/// Rounds up at both steps so that `quote_output` on the returned input
/// yields at least `amount_out`.
/// - Δin_net = ⌈x0 · Δout / (y0 - Δout)⌉
/// - Δin = ⌈Δin_net / (1 - fee)⌉
pub fn quote_input(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_out: Amount,
    fee_bps: u64,
) -> Result<Amount> {
    check_bps(fee_bps, "fee_basis_points must be in [0, 10000]")?;
    check_reserves(reserve_in, reserve_out)?;
    if amount_out == 0 {
        return Err(KernelError::InvalidParameter("amount_out must be > 0"));
    }
    if amount_out >= reserve_out {
        return Err(KernelError::InsufficientLiquidity(
            "amount_out would drain reserve_out",
        ));
    }
    if fee_bps == BPS_SCALE {
        return Err(KernelError::InvalidParameter(
            "a 100% fee leaves nothing to swap",
        ));
    }

    let dx_net = mul_div_up(
        reserve_in as u128,
        amount_out as u128,
        (reserve_out - amount_out) as u128,
        "net input",
    )?;
    let dx_in = mul_div_up(
        dx_net,
        BPS_SCALE as u128,
        (BPS_SCALE - fee_bps) as u128,
        "gross input",
    )?;

    to_u64(dx_in, "gross input")
}

/// Marginal price of the input asset in output units, scaled by `PRICE_SCALE`
pub fn spot_price(pool: &LiquidityPool, direction: SwapDirection) -> Result<u64> {
    let (reserve_in, reserve_out) = pool.reserves(direction);
    check_reserves(reserve_in, reserve_out)?;

    let price = mul_div_down(
        reserve_out as u128,
        PRICE_SCALE as u128,
        reserve_in as u128,
        "spot price",
    )?;
    to_u64(price, "spot price")
}

/// Execute a swap against a pool value
///
/// Returns the updated pool and the output amount. The whole `amount_in`
/// (fee included) lands in the input reserve, so k grows by the fee.
///
/// `fee_bps` prices this swap and overrides `pool.fee_basis_points`, which
/// is carried into the returned pool unchanged.
pub fn apply_swap(
    pool: &LiquidityPool,
    direction: SwapDirection,
    amount_in: Amount,
    fee_bps: u64,
) -> Result<(LiquidityPool, Amount)> {
    if fee_bps != pool.fee_basis_points {
        log::debug!(
            "swap priced at {} bps, pool stores {} bps",
            fee_bps,
            pool.fee_basis_points
        );
    }
    let (reserve_in, reserve_out) = pool.reserves(direction);
    let amount_out = quote_output(reserve_in, reserve_out, amount_in, fee_bps)?;

    if amount_out >= reserve_out {
        return Err(KernelError::InsufficientLiquidity(
            "swap would drain reserve_out",
        ));
    }

    let new_in = add_u64(reserve_in, amount_in, "reserve_in after swap")?;
    let new_out = reserve_out - amount_out;
    let next = pool.with_reserves(direction, new_in, new_out);

    log::trace!(
        "swap {:?}: in {} out {} (k {} -> {})",
        direction,
        amount_in,
        amount_out,
        pool.invariant(),
        next.invariant()
    );
    Ok((next, amount_out))
}
