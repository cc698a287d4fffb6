#![deny(warnings)]
#![no_std]

use liquidation_interface::types::{
    account_context::AccountContext, error::Error, fcash_liquidation::FCashLiquidation,
    liquidation_config::LiquidationConfig, portfolio_asset::PortfolioAsset,
};
use liquidation_interface::LiquidationTrait;
use methods::{
    enable_bitmap_currency::enable_bitmap_currency,
    fcash_notional::fcash_notional,
    initialize::initialize,
    liquidate_cross_fcash::{calc_cross_fcash, liquidate_cross_fcash},
    liquidate_local_fcash::{calc_local_fcash, liquidate_local_fcash},
    set_liquidation_config::set_liquidation_config,
    set_transfer_fee::set_transfer_fee,
    settle_account::settle_account,
};
use soroban_sdk::{contract, contractimpl, Address, Env, Map, Vec};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;
mod types;

#[contract]
pub struct LiquidationEngine;

#[contractimpl]
impl LiquidationTrait for LiquidationEngine {
    fn initialize(
        env: Env,
        admin: Address,
        free_collateral: Address,
        market_oracle: Address,
        config: LiquidationConfig,
    ) -> Result<(), Error> {
        initialize(&env, &admin, &free_collateral, &market_oracle, &config)
    }

    fn set_liquidation_config(env: Env, config: LiquidationConfig) -> Result<(), Error> {
        set_liquidation_config(&env, &config)
    }

    fn liquidation_config(env: Env) -> Result<LiquidationConfig, Error> {
        read_liquidation_config(&env)
    }

    fn set_transfer_fee(env: Env, currency: u32, has_fee: bool) -> Result<(), Error> {
        set_transfer_fee(&env, currency, has_fee)
    }

    fn enable_bitmap_currency(env: Env, account: Address, currency: u32) -> Result<(), Error> {
        enable_bitmap_currency(&env, &account, currency)
    }

    fn settle_account(env: Env, account: Address) -> Result<AccountContext, Error> {
        settle_account(&env, &account)
    }

    fn account_context(env: Env, account: Address) -> AccountContext {
        read_account_context(&env, &account)
    }

    fn cash_balances(env: Env, account: Address) -> Map<u32, i128> {
        read_cash_balances(&env, &account)
    }

    fn portfolio(env: Env, account: Address) -> Vec<PortfolioAsset> {
        read_portfolio(&env, &account)
    }

    fn fcash_notional(env: Env, account: Address, currency: u32, maturity: u64) -> i128 {
        fcash_notional(&env, &account, currency, maturity)
    }

    fn calc_local_fcash(
        env: Env,
        account: Address,
        local_currency: u32,
        maturities: Vec<u64>,
        max_amounts: Vec<i128>,
    ) -> Result<FCashLiquidation, Error> {
        calc_local_fcash(&env, &account, local_currency, &maturities, &max_amounts)
    }

    fn calc_cross_fcash(
        env: Env,
        account: Address,
        local_currency: u32,
        collateral_currency: u32,
        maturities: Vec<u64>,
        max_amounts: Vec<i128>,
    ) -> Result<FCashLiquidation, Error> {
        calc_cross_fcash(
            &env,
            &account,
            local_currency,
            collateral_currency,
            &maturities,
            &max_amounts,
        )
    }

    fn liquidate_local_fcash(
        env: Env,
        liquidator: Address,
        account: Address,
        local_currency: u32,
        maturities: Vec<u64>,
        max_amounts: Vec<i128>,
    ) -> Result<FCashLiquidation, Error> {
        liquidate_local_fcash(
            &env,
            &liquidator,
            &account,
            local_currency,
            &maturities,
            &max_amounts,
        )
    }

    fn liquidate_cross_fcash(
        env: Env,
        liquidator: Address,
        account: Address,
        local_currency: u32,
        collateral_currency: u32,
        maturities: Vec<u64>,
        max_amounts: Vec<i128>,
    ) -> Result<FCashLiquidation, Error> {
        liquidate_cross_fcash(
            &env,
            &liquidator,
            &account,
            local_currency,
            collateral_currency,
            &maturities,
            &max_amounts,
        )
    }
}
