//! Collateral risk evaluation
//!
//! Health comparisons never divide: `is_liquidatable` cross-multiplies so a
//! ratio exactly at the threshold is not rounded below it.

use finkern_common::{
    check_percent, mul_div_down, mul_u128, to_u64, Amount, KernelError, Result, BPS_SCALE,
    PERCENT_SCALE, PRICE_SCALE,
};

use crate::state::{CollateralPosition, CollateralRatio, LiquidationQuote};

/// `collateral_amount * collateral_price`, unscaled
fn collateral_product(position: &CollateralPosition) -> Result<u128> {
    mul_u128(
        position.collateral_amount as u128,
        position.collateral_price as u128,
        "collateral_amount * collateral_price",
    )
}

/// `debt_amount * debt_price`, unscaled
fn debt_product(position: &CollateralPosition) -> Result<u128> {
    mul_u128(
        position.debt_amount as u128,
        position.debt_price as u128,
        "debt_amount * debt_price",
    )
}

/// Collateral value in quote units
pub fn collateral_value(position: &CollateralPosition) -> Result<Amount> {
    let value = collateral_product(position)? / PRICE_SCALE as u128;
    to_u64(value, "collateral value")
}

/// Debt value in quote units
pub fn debt_value(position: &CollateralPosition) -> Result<Amount> {
    let value = debt_product(position)? / PRICE_SCALE as u128;
    to_u64(value, "debt value")
}

/// Collateralization ratio in basis points, or `Infinite` when the debt is
/// worth nothing
pub fn collateralization_ratio(position: &CollateralPosition) -> Result<CollateralRatio> {
    let debt = debt_product(position)?;
    if debt == 0 {
        return Ok(CollateralRatio::Infinite);
    }

    let collateral = collateral_product(position)?;
    let bps = mul_div_down(collateral, BPS_SCALE as u128, debt, "collateralization ratio")?;

    log::trace!("collateralization ratio {} bps", bps);
    Ok(CollateralRatio::Finite(bps))
}

/// Ratio (in percent) strictly below `threshold_percent`
///
/// Evaluated as `collateral * 100 < threshold * debt`, so equality is
/// healthy. Zero debt value, including an empty position, is never
/// liquidatable.
pub fn is_liquidatable(position: &CollateralPosition, threshold_percent: u64) -> Result<bool> {
    let debt = debt_product(position)?;
    if debt == 0 {
        return Ok(false);
    }

    let collateral = collateral_product(position)?;
    let lhs = mul_u128(collateral, PERCENT_SCALE as u128, "scaled collateral value")?;
    let rhs = mul_u128(debt, threshold_percent as u128, "scaled debt requirement")?;

    let liquidatable = lhs < rhs;
    if liquidatable {
        log::debug!(
            "position under threshold {}%: collateral {} vs debt {}",
            threshold_percent,
            collateral,
            debt
        );
    }
    Ok(liquidatable)
}

/// Liquidator compensation: `collateral_value * bonus_percent / 100`
pub fn liquidation_bonus(collateral_value: Amount, bonus_percent: u64) -> Result<Amount> {
    check_percent(bonus_percent, "bonus_percent must be in [0, 100]")?;
    let bonus = mul_div_down(
        collateral_value as u128,
        bonus_percent as u128,
        PERCENT_SCALE as u128,
        "liquidation bonus",
    )?;
    to_u64(bonus, "liquidation bonus")
}

/// Collateral a liquidator receives for repaying `repay_amount` of debt
///
/// Converts the repaid debt into collateral at the two prices, adds the
/// bonus, and caps the total at the posted collateral. Does not check health;
/// callers gate on `is_liquidatable` first.
pub fn liquidation_quote(
    position: &CollateralPosition,
    repay_amount: Amount,
    bonus_percent: u64,
) -> Result<LiquidationQuote> {
    check_percent(bonus_percent, "bonus_percent must be in [0, 100]")?;
    if repay_amount == 0 || repay_amount > position.debt_amount {
        return Err(KernelError::InvalidParameter(
            "repay_amount must be in (0, debt_amount]",
        ));
    }
    if position.collateral_price == 0 {
        return Err(KernelError::InvalidParameter("collateral_price is zero"));
    }

    // Collateral units worth the repaid debt: repay * debt_price / collateral_price
    let base = mul_div_down(
        repay_amount as u128,
        position.debt_price as u128,
        position.collateral_price as u128,
        "repaid debt in collateral units",
    )?;
    let bonus = mul_div_down(
        base,
        bonus_percent as u128,
        PERCENT_SCALE as u128,
        "bonus collateral",
    )?;

    let wanted = base
        .checked_add(bonus)
        .ok_or(KernelError::ArithmeticOverflow("collateral owed to liquidator"))?;
    let seized = wanted.min(position.collateral_amount as u128);
    let collateral_seized = to_u64(seized, "collateral seized")?;
    let bonus_collateral = to_u64(seized.saturating_sub(base), "bonus collateral")?;

    log::trace!(
        "liquidation quote: repay {} -> seize {} (bonus {})",
        repay_amount,
        collateral_seized,
        bonus_collateral
    );
    Ok(LiquidationQuote {
        debt_repaid: repay_amount,
        collateral_seized,
        bonus_collateral,
    })
}
