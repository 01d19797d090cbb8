//! Finkern AMM - Constant Product Market Maker (x·y=k)
//!
//! Pure pricing for a two-asset reserve pool:
//! - Swap quotes with the fee taken on input
//! - Reserve updates that never decrease k
//! - LP share minting and redemption

pub mod liquidity;
pub mod math;
pub mod state;

pub use liquidity::*;
pub use math::*;
pub use state::*;
