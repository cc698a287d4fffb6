use liquidation_interface::types::error::Error;
use liquidation_interface::types::liquidation_config::LiquidationConfig;
use soroban_sdk::Vec;

use crate::types::claim_orientation::ClaimOrientation;
use crate::types::fcash_context::FCashContext;
use crate::types::rate_oracle::RateOracle;

use super::benefit::local_benefit_required;
use super::discount_factors::discount_factors;
use super::liquidation_amount::calculate_liquidation_amount;

/// Allocates the local benefit across fCash of `local_currency` in the order of
/// `maturities`. Asset claims are bought for cash, debt claims are taken over
/// together with cash from the account.
pub fn liquidate_fcash_local(
    c: &mut FCashContext,
    oracle: &impl RateOracle,
    local_currency: u32,
    maturities: &Vec<u64>,
    max_amounts: &Vec<i128>,
    block_time: u64,
    config: &LiquidationConfig,
) -> Result<(), Error> {
    c.benefit_required = local_benefit_required(&c.factors)?;
    c.local_cash_balance_underlying = c
        .factors
        .local_asset_rate
        .convert_to_underlying(c.account.cash_balance(local_currency))
        .ok_or(Error::LiquidationMathError)?;

    let mut underlying_from_liquidator: i128 = 0;

    for (i, maturity) in maturities.iter().enumerate() {
        let index = i as u32;
        let notional = c.account.fcash_notional(local_currency, maturity);

        let orientation = match ClaimOrientation::of(notional) {
            Some(orientation) => orientation,
            None => continue,
        };

        if !orientation.is_asset() && c.local_cash_balance_underlying.is_negative() {
            return Err(Error::InsufficientCashBalance);
        }

        let (risk_adjusted_df, liquidation_df) =
            discount_factors(&c.factors, oracle, maturity, block_time, orientation)?;

        let benefit_per_notional = liquidation_df
            .checked_sub(risk_adjusted_df)
            .ok_or(Error::LiquidationMathError)?
            .abs();

        if benefit_per_notional.is_zero() {
            continue;
        }

        let required = benefit_per_notional
            .recip_mul_int(c.benefit_required)
            .ok_or(Error::LiquidationMathError)?;

        let mut fcash_to_liquidate = calculate_liquidation_amount(
            required,
            notional.abs(),
            max_amounts.get(index).unwrap_or(0),
            config.default_liquidation_portion,
        )?;

        let mut liquidation_pv = liquidation_df
            .mul_int(fcash_to_liquidate)
            .ok_or(Error::LiquidationMathError)?;

        // Debt is only taken over against cash the account holds
        if !orientation.is_asset() && liquidation_pv > c.local_cash_balance_underlying {
            fcash_to_liquidate = liquidation_df
                .recip_mul_int(c.local_cash_balance_underlying)
                .ok_or(Error::LiquidationMathError)?;
            liquidation_pv = c.local_cash_balance_underlying;
        }

        let benefit_gained = benefit_per_notional
            .mul_int(fcash_to_liquidate)
            .ok_or(Error::LiquidationMathError)?;

        let fcash_to_liquidate = orientation
            .apply_sign(fcash_to_liquidate)
            .ok_or(Error::LiquidationMathError)?;
        let liquidation_pv = orientation
            .apply_sign(liquidation_pv)
            .ok_or(Error::LiquidationMathError)?;

        underlying_from_liquidator = underlying_from_liquidator
            .checked_add(liquidation_pv)
            .ok_or(Error::LiquidationMathError)?;
        c.local_cash_balance_underlying = c
            .local_cash_balance_underlying
            .checked_add(liquidation_pv)
            .ok_or(Error::LiquidationMathError)?;
        c.benefit_required = c
            .benefit_required
            .checked_sub(benefit_gained)
            .ok_or(Error::LiquidationMathError)?;

        c.fcash_notional_transfers.set(index, fcash_to_liquidate);

        if c.benefit_required <= config.liquidation_dust {
            break;
        }
    }

    c.local_asset_cash_from_liquidator = c
        .factors
        .local_asset_rate
        .convert_from_underlying(underlying_from_liquidator)
        .ok_or(Error::LiquidationMathError)?;

    Ok(())
}
