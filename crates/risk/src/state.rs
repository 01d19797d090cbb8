//! Collateral position and ratio values

use finkern_common::{Amount, BPS_SCALE, PERCENT_SCALE};

/// Collateralized debt position
///
/// Prices are quote units per whole token, scaled by `PRICE_SCALE`. Only the
/// ratio of the two prices matters for health; the scale matters for values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollateralPosition {
    pub collateral_amount: Amount,
    pub debt_amount: Amount,
    pub collateral_price: u64,
    pub debt_price: u64,
}

/// Collateralization ratio
///
/// `Finite` holds basis points (15_000 = 150%), floored. Ordering puts
/// `Infinite` above every finite ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CollateralRatio {
    Finite(u128),
    Infinite,
}

impl CollateralRatio {
    /// Ratio in whole percent (150 = 150%), floored; `None` when infinite
    pub fn as_percent(&self) -> Option<u128> {
        match self {
            CollateralRatio::Finite(bps) => Some(bps / (BPS_SCALE / PERCENT_SCALE) as u128),
            CollateralRatio::Infinite => None,
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, CollateralRatio::Infinite)
    }
}

/// Outcome of a liquidation quote, in collateral token units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidationQuote {
    /// Debt tokens the liquidator repays
    pub debt_repaid: Amount,

    /// Collateral tokens handed to the liquidator, bonus included
    pub collateral_seized: Amount,

    /// Portion of `collateral_seized` that is bonus
    pub bonus_collateral: Amount,
}
