use common::FixedI128;
use free_collateral_interface::types::liquidation_factors::LiquidationFactors;
use liquidation_interface::types::error::Error;

use crate::types::claim_orientation::ClaimOrientation;
use crate::types::rate_oracle::RateOracle;

/// Present value of one unit paid after `time_to_maturity` seconds at annualized `rate`.
/// exp(-rate * t / ONE_YEAR)
pub fn discount_factor(rate: FixedI128, time_to_maturity: u64) -> Result<FixedI128, Error> {
    FixedI128::from_annual_rate(rate, time_to_maturity)
        .and_then(|exponent| exponent.checked_neg())
        .and_then(|exponent| exponent.exp())
        .ok_or(Error::DiscountFactorMathError)
}

/// Returns (risk adjusted, liquidation) discount factors for the claim at `maturity`.
/// Asset claims are discounted at oracle rate plus a haircut, debt claims at
/// oracle rate minus a buffer floored at zero.
pub fn discount_factors(
    factors: &LiquidationFactors,
    oracle: &impl RateOracle,
    maturity: u64,
    block_time: u64,
    orientation: ClaimOrientation,
) -> Result<(FixedI128, FixedI128), Error> {
    if maturity < block_time {
        return Err(Error::MaturedClaim);
    }
    let time_to_maturity = maturity - block_time;

    let cash_group = &factors.cash_group;
    let oracle_rate = oracle.oracle_rate(cash_group.currency, maturity, block_time)?;

    let (risk_adjusted_spread, liquidation_spread) = match orientation {
        ClaimOrientation::Asset => (
            cash_group.fcash_haircut,
            cash_group.liquidation_fcash_haircut,
        ),
        ClaimOrientation::Debt => (cash_group.debt_buffer, cash_group.liquidation_debt_buffer),
    };

    let risk_adjusted_rate = adjusted_rate(oracle_rate, risk_adjusted_spread, orientation)?;
    let liquidation_rate = adjusted_rate(oracle_rate, liquidation_spread, orientation)?;

    Ok((
        discount_factor(risk_adjusted_rate, time_to_maturity)?,
        discount_factor(liquidation_rate, time_to_maturity)?,
    ))
}

fn adjusted_rate(
    oracle_rate: FixedI128,
    spread: u32,
    orientation: ClaimOrientation,
) -> Result<FixedI128, Error> {
    let spread = FixedI128::from_percentage(spread).ok_or(Error::DiscountFactorMathError)?;

    match orientation {
        ClaimOrientation::Asset => oracle_rate
            .checked_add(spread)
            .ok_or(Error::DiscountFactorMathError),
        ClaimOrientation::Debt => oracle_rate
            .checked_sub(spread)
            .map(|rate| rate.max(FixedI128::ZERO))
            .ok_or(Error::DiscountFactorMathError),
    }
}
