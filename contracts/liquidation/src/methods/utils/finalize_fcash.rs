use liquidation_interface::types::error::Error;
use liquidation_interface::types::fcash_liquidation::FCashLiquidation;
use liquidation_interface::types::portfolio_asset::PortfolioAsset;
use soroban_sdk::{vec, Env, Vec};

use crate::types::account_state::AccountState;
use crate::types::fcash_context::FCashContext;
use crate::types::solvency_checker::SolvencyChecker;

/// Moves cash and fCash between the liquidator and the liquidated account and
/// persists both. Cash is settled in `local_currency`, fCash transfers are
/// denominated in `fcash_currency`.
#[allow(clippy::too_many_arguments)]
pub fn finalize_fcash_liquidation(
    env: &Env,
    liquidator: &mut AccountState,
    c: &mut FCashContext,
    local_currency: u32,
    fcash_currency: u32,
    maturities: &Vec<u64>,
    has_transfer_fee: bool,
    solvency_checker: &impl SolvencyChecker,
) -> Result<FCashLiquidation, Error> {
    let net_from_liquidator = c.local_asset_cash_from_liquidator;

    let liquidator_balance = liquidator
        .cash_balance(local_currency)
        .checked_sub(net_from_liquidator)
        .ok_or(Error::MathOverflowError)?;

    // Tokens with transfer fees can't be borrowed against, the liquidator pays from cash
    if has_transfer_fee && net_from_liquidator.is_positive() {
        if liquidator.context.has_any_debt() {
            return Err(Error::LiquidatorHasDebt);
        }
        if liquidator_balance.is_negative() {
            return Err(Error::InsufficientLiquidatorBalance);
        }
    }

    let mut liquidator_incurs_debt =
        liquidator_balance.is_negative() && net_from_liquidator.is_positive();

    liquidator.set_cash_balance(local_currency, liquidator_balance);

    let account_balance = c
        .account
        .cash_balance(local_currency)
        .checked_add(net_from_liquidator)
        .ok_or(Error::MathOverflowError)?;
    c.account.set_cash_balance(local_currency, account_balance);

    let mut liquidator_assets = vec![env];
    let mut account_assets = vec![env];

    for (maturity, notional) in maturities.iter().zip(c.fcash_notional_transfers.iter()) {
        if notional == 0 {
            continue;
        }

        liquidator_incurs_debt |= notional.is_negative();

        let inverted = notional.checked_neg().ok_or(Error::MathOverflowError)?;
        liquidator_assets.push_back(PortfolioAsset::fcash(fcash_currency, maturity, notional));
        account_assets.push_back(PortfolioAsset::fcash(fcash_currency, maturity, inverted));
    }

    liquidator.add_assets(&liquidator_assets)?;
    c.account.add_assets(&account_assets)?;

    liquidator.write(env);
    c.account.write(env);

    if liquidator_incurs_debt && liquidator.context.has_any_debt() {
        solvency_checker.check_and_fail(&liquidator.account)?;
    }

    Ok(c.result())
}
