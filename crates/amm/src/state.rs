//! AMM pool state - constant product reserves

use finkern_common::{check_bps, Amount, Result};

/// Two-asset reserve pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LiquidityPool {
    /// Asset A reserve (x in x·y=k)
    pub reserve_a: Amount,

    /// Asset B reserve (y in x·y=k)
    pub reserve_b: Amount,

    /// Fee in basis points (e.g., 30 = 0.3%)
    pub fee_basis_points: u64,

    /// Outstanding LP tokens
    pub lp_supply: Amount,
}

/// Which reserve the trader pays into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Pay A, receive B
    AToB,
    /// Pay B, receive A
    BToA,
}

impl LiquidityPool {
    /// Pool with no reserves and no LP tokens yet
    pub fn empty(fee_basis_points: u64) -> Result<Self> {
        check_bps(fee_basis_points, "fee_basis_points must be in [0, 10000]")?;
        Ok(Self {
            fee_basis_points,
            ..Self::default()
        })
    }

    /// Pool from known reserves and supply
    pub fn new(
        reserve_a: Amount,
        reserve_b: Amount,
        fee_basis_points: u64,
        lp_supply: Amount,
    ) -> Result<Self> {
        check_bps(fee_basis_points, "fee_basis_points must be in [0, 10000]")?;
        Ok(Self {
            reserve_a,
            reserve_b,
            fee_basis_points,
            lp_supply,
        })
    }

    /// (reserve_in, reserve_out) for a swap direction
    pub fn reserves(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::AToB => (self.reserve_a, self.reserve_b),
            SwapDirection::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    /// Copy with (reserve_in, reserve_out) written back for a direction
    pub fn with_reserves(&self, direction: SwapDirection, reserve_in: Amount, reserve_out: Amount) -> Self {
        match direction {
            SwapDirection::AToB => Self {
                reserve_a: reserve_in,
                reserve_b: reserve_out,
                ..*self
            },
            SwapDirection::BToA => Self {
                reserve_a: reserve_out,
                reserve_b: reserve_in,
                ..*self
            },
        }
    }

    /// k = reserve_a * reserve_b (always fits in u128)
    pub fn invariant(&self) -> u128 {
        self.reserve_a as u128 * self.reserve_b as u128
    }
}
