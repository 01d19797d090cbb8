//! Finkern risk - collateral-to-debt evaluation for lending positions
//!
//! ratio = (collateral_amount * collateral_price) / (debt_amount * debt_price)
//!
//! A position whose debt is worth nothing has an infinite ratio and is never
//! liquidatable. Thresholds are supplied per call because different asset
//! pairs need different minimum ratios.

pub mod evaluator;
pub mod state;

pub use evaluator::*;
pub use state::*;
