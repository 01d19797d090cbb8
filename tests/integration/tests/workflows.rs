//! Caller workflows composing the kernels
//!
//! Each test threads returned values into the next call the way an
//! off-engine service would, with policy read from an `EngineConfig`.

use finkern_amm::{apply_deposit, apply_swap, apply_withdraw, quote_output, LiquidityPool, SwapDirection};
use finkern_common::{KernelError, PRICE_SCALE};
use finkern_integration_tests::{init_logging, load_policy, EngineConfig};
use finkern_rewards::{claim, share_of_pool, stake, total_rewards, unstake, StakingPool, StakingPosition};
use finkern_risk::{
    collateralization_ratio, is_liquidatable, liquidation_quote, CollateralPosition,
    CollateralRatio,
};
use finkern_vesting::{is_fully_vested, release, vested_amount, VestingSchedule};

const POLICY: &str = r#"
[risk]
liquidation_threshold_percent = 150
liquidation_bonus_percent = 5

[amm]
fee_basis_points = 30

[rewards]
reward_rate = 1000000000000000
"#;

#[test]
fn test_liquidate_then_sell_seized_collateral() {
    init_logging();
    let policy = load_policy(POLICY).unwrap();

    // 1400 collateral vs 1000 debt at par: 140% against a 150% threshold
    let position = CollateralPosition {
        collateral_amount: 1_400,
        debt_amount: 1_000,
        collateral_price: PRICE_SCALE,
        debt_price: PRICE_SCALE,
    };
    assert_eq!(
        collateralization_ratio(&position).unwrap(),
        CollateralRatio::Finite(14_000)
    );
    assert!(is_liquidatable(&position, policy.risk.liquidation_threshold_percent).unwrap());

    let quote = liquidation_quote(&position, 500, policy.risk.liquidation_bonus_percent).unwrap();
    assert_eq!(quote.debt_repaid, 500);
    assert_eq!(quote.collateral_seized, 525);
    assert_eq!(quote.bonus_collateral, 25);

    // The caller applies the quote; what remains is back above threshold
    let remaining = CollateralPosition {
        collateral_amount: position.collateral_amount - quote.collateral_seized,
        debt_amount: position.debt_amount - quote.debt_repaid,
        ..position
    };
    assert!(!is_liquidatable(&remaining, policy.risk.liquidation_threshold_percent).unwrap());

    // Liquidator dumps the seized collateral into a collateral/debt pool
    let pool = LiquidityPool::new(100_000, 100_000, policy.amm.fee_basis_points, 100_000).unwrap();
    let (after, proceeds) = apply_swap(
        &pool,
        SwapDirection::AToB,
        quote.collateral_seized,
        policy.amm.fee_basis_points,
    )
    .unwrap();

    // 525 * 0.997 -> 523 effective; 100_000 * 523 / 100_523 -> 520
    assert_eq!(proceeds, 520);
    assert!(proceeds > quote.debt_repaid, "bonus should cover slippage and fee");
    assert!(after.invariant() > pool.invariant());
}

#[test]
fn test_vesting_released_in_installments() {
    init_logging();
    let mut schedule = VestingSchedule::new(1_000, 1_000, 100, 1_000).unwrap();
    let mut paid = 0;

    // (now, expected release)
    let installments = [(1_050, 0), (1_100, 100), (1_600, 500), (1_600, 0), (3_000, 400)];
    for (now, expected) in installments {
        let (next, amount) = release(&schedule, now).unwrap();
        assert_eq!(amount, expected, "release at t={}", now);
        paid += amount;
        schedule = next;
    }

    assert_eq!(paid, 1_000);
    assert_eq!(schedule.released_amount, 1_000);
    assert!(is_fully_vested(&schedule, 3_000));
    assert_eq!(vested_amount(&schedule, u64::MAX).unwrap(), 1_000);
}

#[test]
fn test_two_stakers_share_a_pool() {
    init_logging();
    let policy = load_policy(POLICY).unwrap();
    let pool = StakingPool::new(policy.rewards.reward_rate);

    let (pool, alice) = stake(&pool, &StakingPosition::default(), 1_000_000, 0).unwrap();
    let (pool, bob) = stake(&pool, &StakingPosition::default(), 3_000_000, 100).unwrap();
    assert_eq!(pool.total_staked, 4_000_000);
    assert_eq!(bob.staked_at, 100);

    // 0.001 reward per staked unit per second
    assert_eq!(total_rewards(&alice, &pool, 200).unwrap(), 200_000);
    assert_eq!(total_rewards(&bob, &pool, 200).unwrap(), 300_000);
    assert_eq!(share_of_pool(&alice, &pool).unwrap(), 250_000_000);

    let (alice, paid) = claim(&alice, &pool, 200).unwrap();
    assert_eq!(paid, 200_000);
    assert_eq!(alice.accrued_rewards, 0);
    assert_eq!(total_rewards(&alice, &pool, 200).unwrap(), 0);

    let (pool, bob) = unstake(&pool, &bob, 3_000_000, 200).unwrap();
    assert_eq!(pool.total_staked, 1_000_000);
    assert_eq!(bob.staked_amount, 0);
    assert_eq!(bob.accrued_rewards, 300_000);

    // Nothing staked, nothing earned, but the owed balance stays
    assert_eq!(total_rewards(&bob, &pool, 10_000).unwrap(), 300_000);
    assert_eq!(share_of_pool(&alice, &pool).unwrap(), 1_000_000_000);
}

#[test]
fn test_liquidity_provider_earns_swap_fees() {
    init_logging();
    let policy = EngineConfig::default();
    let fee = policy.amm.fee_basis_points;

    let pool = LiquidityPool::empty(fee).unwrap();
    let (pool, minted) = apply_deposit(&pool, 1_000, 4_000).unwrap();
    assert_eq!(minted, 2_000);

    // 100 * 0.997 -> 99 effective; 4000 * 99 / 1099 -> 360
    assert_eq!(quote_output(1_000, 4_000, 100, fee).unwrap(), 360);
    let (pool, out) = apply_swap(&pool, SwapDirection::AToB, 100, fee).unwrap();
    assert_eq!(out, 360);
    assert_eq!((pool.reserve_a, pool.reserve_b), (1_100, 3_640));

    // Sole LP redeems the whole pool, fee included
    let (pool, a, b) = apply_withdraw(&pool, minted).unwrap();
    assert_eq!((a, b), (1_100, 3_640));
    assert!(a as u128 * b as u128 > 1_000 * 4_000);
    assert_eq!(pool.lp_supply, 0);
}

#[test]
fn test_policy_file_round_trip_drives_kernels() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finkern.toml");
    let path = path.to_str().unwrap();

    EngineConfig::write_default(path).unwrap();
    let policy = EngineConfig::load(path).unwrap();
    assert_eq!(policy, EngineConfig::default());

    // Exactly at the default 150% threshold is still healthy
    let position = CollateralPosition {
        collateral_amount: 150,
        debt_amount: 100,
        collateral_price: PRICE_SCALE,
        debt_price: PRICE_SCALE,
    };
    assert!(!is_liquidatable(&position, policy.risk.liquidation_threshold_percent).unwrap());

    // Default reward rate is zero
    let (pool, position) = stake(
        &StakingPool::new(policy.rewards.reward_rate),
        &StakingPosition::default(),
        1_000,
        0,
    )
    .unwrap();
    assert_eq!(total_rewards(&position, &pool, 1_000_000).unwrap(), 0);
}

#[test]
fn test_bad_policy_is_rejected_before_use() {
    init_logging();
    let err = load_policy("[amm]\nfee_basis_points = 10001\n").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<KernelError>(),
        Some(KernelError::InvalidParameter(_))
    ));
}

#[test]
fn test_clock_running_backwards_is_an_error_everywhere() {
    init_logging();
    let position = StakingPosition::new(1_000, 500);
    let pool = StakingPool {
        reward_rate: 1,
        total_staked: 1_000,
    };
    assert!(matches!(
        claim(&position, &pool, 499),
        Err(KernelError::InvalidTimeOrdering(_))
    ));

    // Vesting treats early queries as "nothing vested" instead
    let schedule = VestingSchedule::new(1_000, 500, 0, 100).unwrap();
    assert_eq!(vested_amount(&schedule, 0).unwrap(), 0);
}
