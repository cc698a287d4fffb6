use common::FixedI128;
use free_collateral_interface::types::liquidation_factors::LiquidationFactors;
use liquidation_interface::types::error::Error;
use liquidation_interface::types::liquidation_config::LiquidationConfig;
use soroban_sdk::Vec;

use crate::types::claim_orientation::ClaimOrientation;
use crate::types::fcash_context::FCashContext;
use crate::types::rate_oracle::RateOracle;

use super::benefit::{cross_currency_benefit_and_discount, cross_currency_benefit_divisor};
use super::discount_factors::discount_factors;
use super::liquidation_amount::calculate_liquidation_amount;

/// Sells positive fCash of `collateral_currency` to the liquidator in exchange
/// for local currency cash, in the order of `maturities`.
pub fn liquidate_fcash_cross_currency(
    c: &mut FCashContext,
    oracle: &impl RateOracle,
    collateral_currency: u32,
    maturities: &Vec<u64>,
    max_amounts: &Vec<i128>,
    block_time: u64,
    config: &LiquidationConfig,
) -> Result<(), Error> {
    if !c.factors.local_asset_available.is_negative() {
        return Err(Error::NoLocalDebt);
    }
    if !c.factors.collateral_asset_available.is_positive() {
        return Err(Error::NoCollateralAvailable);
    }

    let (benefit_required, liquidation_discount) = cross_currency_benefit_and_discount(&c.factors)?;
    c.benefit_required = benefit_required;
    c.liquidation_discount = liquidation_discount;

    for (i, maturity) in maturities.iter().enumerate() {
        let index = i as u32;
        let notional = c.account.fcash_notional(collateral_currency, maturity);

        match ClaimOrientation::of(notional) {
            None => continue,
            Some(ClaimOrientation::Debt) => return Err(Error::NegativeCollateralClaim),
            Some(ClaimOrientation::Asset) => {}
        }

        let fcash_to_liquidate = cross_currency_fcash_to_liquidate(
            c,
            oracle,
            maturity,
            block_time,
            notional,
            max_amounts.get(index).unwrap_or(0),
            config,
        )?;

        c.fcash_notional_transfers.set(index, fcash_to_liquidate);

        if c.benefit_required <= config.liquidation_dust
            || !c.factors.collateral_asset_available.is_positive()
        {
            break;
        }
    }

    Ok(())
}

fn cross_currency_fcash_to_liquidate(
    c: &mut FCashContext,
    oracle: &impl RateOracle,
    maturity: u64,
    block_time: u64,
    notional: i128,
    max_amount: i128,
    config: &LiquidationConfig,
) -> Result<i128, Error> {
    let (risk_adjusted_df, liquidation_df) = discount_factors(
        &c.factors,
        oracle,
        maturity,
        block_time,
        ClaimOrientation::Asset,
    )?;

    let benefit_divisor = cross_currency_benefit_divisor(
        &c.factors,
        c.liquidation_discount,
        risk_adjusted_df,
        liquidation_df,
    )?;

    if !benefit_divisor.is_positive() {
        return Ok(0);
    }

    let required = benefit_divisor
        .recip_mul_int(c.benefit_required)
        .ok_or(Error::LiquidationMathError)?;

    let fcash_to_liquidate = calculate_liquidation_amount(
        required,
        notional,
        max_amount,
        config.default_liquidation_portion,
    )?;

    let (fcash_to_liquidate, local_asset_from_liquidator) =
        limit_purchase_by_available_amounts(c, risk_adjusted_df, liquidation_df, fcash_to_liquidate)?;

    let benefit_gained = benefit_divisor
        .mul_int(fcash_to_liquidate)
        .ok_or(Error::LiquidationMathError)?;

    c.benefit_required = c
        .benefit_required
        .checked_sub(benefit_gained)
        .ok_or(Error::LiquidationMathError)?;
    c.local_asset_cash_from_liquidator = c
        .local_asset_cash_from_liquidator
        .checked_add(local_asset_from_liquidator)
        .ok_or(Error::LiquidationMathError)?;

    Ok(fcash_to_liquidate)
}

/// Shrinks a purchase of collateral fCash so that neither the collateral the
/// account has left nor its local debt is exceeded.
/// Returns the purchasable notional and local cash, in asset units, paid for it.
pub fn limit_purchase_by_available_amounts(
    c: &mut FCashContext,
    risk_adjusted_df: FixedI128,
    liquidation_df: FixedI128,
    fcash_to_liquidate: i128,
) -> Result<(i128, i128), Error> {
    let collateral_asset_rate = c.factors.cash_group.asset_rate;

    let mut fcash_to_liquidate = fcash_to_liquidate;
    let mut risk_adjusted_pv = risk_adjusted_df
        .mul_int(fcash_to_liquidate)
        .ok_or(Error::LiquidationMathError)?;

    let collateral_underlying_available = collateral_asset_rate
        .convert_to_underlying(c.factors.collateral_asset_available)
        .ok_or(Error::LiquidationMathError)?;

    if risk_adjusted_pv > collateral_underlying_available {
        fcash_to_liquidate = risk_adjusted_df
            .recip_mul_int(collateral_underlying_available)
            .ok_or(Error::LiquidationMathError)?;
        risk_adjusted_pv = collateral_underlying_available;
    }

    let liquidation_pv = liquidation_df
        .mul_int(fcash_to_liquidate)
        .ok_or(Error::LiquidationMathError)?;

    let (limited_fcash, local_asset_from_liquidator) = calculate_local_to_purchase(
        &c.factors,
        c.liquidation_discount,
        liquidation_pv,
        fcash_to_liquidate,
    )?;

    if limited_fcash != fcash_to_liquidate {
        risk_adjusted_pv = risk_adjusted_df
            .mul_int(limited_fcash)
            .ok_or(Error::LiquidationMathError)?;
    }

    if local_asset_from_liquidator.is_negative() {
        return Err(Error::LiquidationMathError);
    }

    let collateral_asset_used = collateral_asset_rate
        .convert_from_underlying(risk_adjusted_pv)
        .ok_or(Error::LiquidationMathError)?;

    c.factors.collateral_asset_available = c
        .factors
        .collateral_asset_available
        .checked_sub(collateral_asset_used)
        .ok_or(Error::LiquidationMathError)?
        .max(0);
    c.factors.local_asset_available = c
        .factors
        .local_asset_available
        .checked_add(local_asset_from_liquidator)
        .ok_or(Error::LiquidationMathError)?;

    Ok((limited_fcash, local_asset_from_liquidator))
}

/// Local cash, in asset units, paid for `collateral_pv` of collateral at the
/// liquidation discount. When that exceeds the local debt of the account, the
/// collateral sold is scaled down to match.
/// Returns (collateral to sell, local asset cash paid).
pub fn calculate_local_to_purchase(
    factors: &LiquidationFactors,
    liquidation_discount: u32,
    collateral_pv: i128,
    collateral_to_sell: i128,
) -> Result<(i128, i128), Error> {
    let local_underlying = factors
        .collateral_eth_rate
        .exchange_rate(&factors.local_eth_rate)
        .zip(FixedI128::from_percentage(liquidation_discount))
        .and_then(|(exchange_rate, discount)| exchange_rate.checked_div(discount))
        .and_then(|price| price.mul_int(collateral_pv))
        .ok_or(Error::LiquidationMathError)?;

    let local_asset = factors
        .local_asset_rate
        .convert_from_underlying(local_underlying)
        .ok_or(Error::LiquidationMathError)?;

    let max_local_asset = factors
        .local_asset_available
        .checked_neg()
        .ok_or(Error::LiquidationMathError)?;

    if local_asset <= max_local_asset {
        return Ok((collateral_to_sell, local_asset));
    }

    let collateral_to_sell = collateral_to_sell
        .checked_mul(max_local_asset)
        .and_then(|scaled| scaled.checked_div(local_asset))
        .ok_or(Error::LiquidationMathError)?;

    Ok((collateral_to_sell, max_local_asset))
}
