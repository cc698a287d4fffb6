use liquidation_interface::types::error::Error;
use liquidation_interface::types::fcash_liquidation::FCashLiquidation;
use soroban_sdk::{Address, Env, Vec};

use crate::event;
use crate::storage::{read_liquidation_config, read_transfer_fee};
use crate::types::account_state::AccountState;
use crate::types::fcash_context::FCashContext;
use crate::types::rate_oracle::MarketOracle;
use crate::types::solvency_checker::FreeCollateralEngine;

use super::utils::cross_currency_fcash::liquidate_fcash_cross_currency;
use super::utils::fcash_context::load_fcash_context;
use super::utils::finalize_fcash::finalize_fcash_liquidation;
use super::utils::validation::{
    require_different_currencies, require_not_self_liquidation, require_valid_currency,
    require_valid_liquidation_input,
};

pub fn calc_cross_fcash(
    env: &Env,
    account: &Address,
    local_currency: u32,
    collateral_currency: u32,
    maturities: &Vec<u64>,
    max_amounts: &Vec<i128>,
) -> Result<FCashLiquidation, Error> {
    let oracle = MarketOracle::new(env)?;
    let engine = FreeCollateralEngine::new(env)?;

    let c = cross_fcash_context(
        env,
        account,
        local_currency,
        collateral_currency,
        maturities,
        max_amounts,
        &oracle,
        &engine,
    )?;

    Ok(c.result())
}

pub fn liquidate_cross_fcash(
    env: &Env,
    liquidator: &Address,
    account: &Address,
    local_currency: u32,
    collateral_currency: u32,
    maturities: &Vec<u64>,
    max_amounts: &Vec<i128>,
) -> Result<FCashLiquidation, Error> {
    liquidator.require_auth();
    require_not_self_liquidation(env, liquidator, account);

    let oracle = MarketOracle::new(env)?;
    let engine = FreeCollateralEngine::new(env)?;

    let mut c = cross_fcash_context(
        env,
        account,
        local_currency,
        collateral_currency,
        maturities,
        max_amounts,
        &oracle,
        &engine,
    )?;

    let mut liquidator_state = AccountState::load(env, liquidator);
    liquidator_state.settle(env, &oracle, env.ledger().timestamp())?;

    let result = finalize_fcash_liquidation(
        env,
        &mut liquidator_state,
        &mut c,
        local_currency,
        collateral_currency,
        maturities,
        read_transfer_fee(env, local_currency),
        &engine,
    )?;

    event::fcash_cross_liquidation(
        env,
        account,
        liquidator,
        local_currency,
        collateral_currency,
        result.net_local_from_liquidator,
        &result.transfers,
    );

    Ok(result)
}

#[allow(clippy::too_many_arguments)]
fn cross_fcash_context(
    env: &Env,
    account: &Address,
    local_currency: u32,
    collateral_currency: u32,
    maturities: &Vec<u64>,
    max_amounts: &Vec<i128>,
    oracle: &MarketOracle,
    engine: &FreeCollateralEngine,
) -> Result<FCashContext, Error> {
    require_valid_currency(env, local_currency);
    require_valid_currency(env, collateral_currency);
    require_different_currencies(env, local_currency, collateral_currency);
    require_valid_liquidation_input(env, maturities, max_amounts);

    let config = read_liquidation_config(env)?;
    let block_time = env.ledger().timestamp();

    let mut c = load_fcash_context(
        env,
        account,
        local_currency,
        collateral_currency,
        maturities.len(),
        oracle,
        engine,
        block_time,
    )?;

    liquidate_fcash_cross_currency(
        &mut c,
        oracle,
        collateral_currency,
        maturities,
        max_amounts,
        block_time,
        &config,
    )?;

    Ok(c)
}
