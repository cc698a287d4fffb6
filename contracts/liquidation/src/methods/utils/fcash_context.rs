use liquidation_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::types::account_state::AccountState;
use crate::types::fcash_context::FCashContext;
use crate::types::rate_oracle::RateOracle;
use crate::types::solvency_checker::FreeCollateralEngine;

/// Settles `account` in memory and builds the context of its liquidation.
/// Fails unless the account is undercollateralized. A zero `collateral_currency`
/// means the liquidated fCash is in the local currency.
#[allow(clippy::too_many_arguments)]
pub fn load_fcash_context(
    env: &Env,
    account: &Address,
    local_currency: u32,
    collateral_currency: u32,
    maturities_count: u32,
    oracle: &impl RateOracle,
    engine: &FreeCollateralEngine,
    block_time: u64,
) -> Result<FCashContext, Error> {
    let mut account_state = AccountState::load(env, account);
    account_state.settle(env, oracle, block_time)?;

    let factors = engine.liquidation_factors(account, local_currency, collateral_currency)?;

    let fcash_currency = if collateral_currency == 0 {
        local_currency
    } else {
        collateral_currency
    };
    if factors.cash_group.currency != fcash_currency {
        return Err(Error::InvalidCurrency);
    }

    if !factors.net_eth_value.is_negative() {
        return Err(Error::SufficientCollateral);
    }

    Ok(FCashContext::new(
        env,
        account_state,
        factors,
        maturities_count,
    ))
}
