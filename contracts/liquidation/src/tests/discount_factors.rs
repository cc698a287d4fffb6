use common::{FixedI128, ONE_YEAR};
use liquidation_interface::types::error::Error;

use crate::methods::utils::discount_factors::{discount_factor, discount_factors};
use crate::tests::sut::{flat_rate_oracle, local_factors, maturity, FlatRateOracle, ONE, START_TIME};
use crate::types::claim_orientation::ClaimOrientation;

#[test]
fn should_be_one_at_maturity() {
    let rate = FixedI128::from_percentage(500u32).unwrap();

    assert_eq!(discount_factor(rate, 0).unwrap(), FixedI128::ONE);
}

#[test]
fn should_be_one_for_zero_rate() {
    assert_eq!(
        discount_factor(FixedI128::ZERO, ONE_YEAR).unwrap(),
        FixedI128::ONE
    );
}

#[test]
fn should_discount_one_year_continuously() {
    let rate = FixedI128::from_percentage(500u32).unwrap();
    let factor = discount_factor(rate, ONE_YEAR).unwrap();

    // e^-0.05 = 0.951229424
    assert!((factor.into_inner() - 951_229_424).abs() <= 20);
}

#[test]
fn should_decrease_with_time_to_maturity() {
    let rate = FixedI128::from_percentage(500u32).unwrap();

    let short = discount_factor(rate, ONE_YEAR / 4).unwrap();
    let long = discount_factor(rate, ONE_YEAR / 2).unwrap();

    assert!(long < short);
    assert!(short < FixedI128::ONE);
}

#[test]
fn should_favor_liquidator_on_asset_claims() {
    let factors = local_factors(-100, -100);

    let (risk_adjusted, liquidation) = discount_factors(
        &factors,
        &flat_rate_oracle(),
        maturity(90),
        START_TIME,
        ClaimOrientation::Asset,
    )
    .unwrap();

    assert!(risk_adjusted < liquidation);
    assert!(liquidation < FixedI128::ONE);
}

#[test]
fn should_favor_liquidator_on_debt_claims() {
    let factors = local_factors(1_000, -10);

    let (risk_adjusted, liquidation) = discount_factors(
        &factors,
        &flat_rate_oracle(),
        maturity(90),
        START_TIME,
        ClaimOrientation::Debt,
    )
    .unwrap();

    assert!(liquidation < risk_adjusted);
    assert!(risk_adjusted < FixedI128::ONE);
}

#[test]
fn should_floor_debt_rate_at_zero() {
    let factors = local_factors(1_000, -10);
    // 0.5% oracle rate, below both debt buffers
    let oracle = FlatRateOracle {
        rate: 5_000_000,
        settlement_rate: ONE,
    };

    let (risk_adjusted, liquidation) = discount_factors(
        &factors,
        &oracle,
        maturity(90),
        START_TIME,
        ClaimOrientation::Debt,
    )
    .unwrap();

    assert_eq!(risk_adjusted, FixedI128::ONE);
    assert_eq!(liquidation, FixedI128::ONE);
}

#[test]
fn should_not_discount_claim_maturing_now() {
    let factors = local_factors(-100, -100);

    let factors = discount_factors(
        &factors,
        &flat_rate_oracle(),
        START_TIME,
        START_TIME,
        ClaimOrientation::Asset,
    )
    .unwrap();

    assert_eq!(factors, (FixedI128::ONE, FixedI128::ONE));
}

#[test]
fn should_fail_for_matured_claim() {
    let factors = local_factors(-100, -100);

    let result = discount_factors(
        &factors,
        &flat_rate_oracle(),
        START_TIME - 1,
        START_TIME,
        ClaimOrientation::Asset,
    );

    assert_eq!(result, Err(Error::MaturedClaim));
}
