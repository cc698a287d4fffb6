#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env, Map, Vec};
use types::account_context::AccountContext;
use types::error::Error;
use types::fcash_liquidation::FCashLiquidation;
use types::liquidation_config::LiquidationConfig;
use types::portfolio_asset::PortfolioAsset;

pub mod types;

pub struct Spec;

/// Interface for fCash liquidation
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LiquidationClient")]
pub trait LiquidationTrait {
    fn initialize(
        env: Env,
        admin: Address,
        free_collateral: Address,
        market_oracle: Address,
        config: LiquidationConfig,
    ) -> Result<(), Error>;

    fn set_liquidation_config(env: Env, config: LiquidationConfig) -> Result<(), Error>;

    fn liquidation_config(env: Env) -> Result<LiquidationConfig, Error>;

    /// Marks `currency` as a token that must be pre-funded by liquidators
    fn set_transfer_fee(env: Env, currency: u32, has_fee: bool) -> Result<(), Error>;

    /// Keeps fCash of `currency` held by `account` in a maturity bitmap.
    /// The account must not hold any fCash yet.
    fn enable_bitmap_currency(env: Env, account: Address, currency: u32) -> Result<(), Error>;

    /// Settles matured fCash of `account` into cash
    fn settle_account(env: Env, account: Address) -> Result<AccountContext, Error>;

    fn account_context(env: Env, account: Address) -> AccountContext;

    fn cash_balances(env: Env, account: Address) -> Map<u32, i128>;

    fn portfolio(env: Env, account: Address) -> Vec<PortfolioAsset>;

    fn fcash_notional(env: Env, account: Address, currency: u32, maturity: u64) -> i128;

    /// Previews a local currency fCash liquidation without changing any state
    fn calc_local_fcash(
        env: Env,
        account: Address,
        local_currency: u32,
        maturities: Vec<u64>,
        max_amounts: Vec<i128>,
    ) -> Result<FCashLiquidation, Error>;

    /// Previews a cross currency fCash liquidation without changing any state
    fn calc_cross_fcash(
        env: Env,
        account: Address,
        local_currency: u32,
        collateral_currency: u32,
        maturities: Vec<u64>,
        max_amounts: Vec<i128>,
    ) -> Result<FCashLiquidation, Error>;

    fn liquidate_local_fcash(
        env: Env,
        liquidator: Address,
        account: Address,
        local_currency: u32,
        maturities: Vec<u64>,
        max_amounts: Vec<i128>,
    ) -> Result<FCashLiquidation, Error>;

    fn liquidate_cross_fcash(
        env: Env,
        liquidator: Address,
        account: Address,
        local_currency: u32,
        collateral_currency: u32,
        maturities: Vec<u64>,
        max_amounts: Vec<i128>,
    ) -> Result<FCashLiquidation, Error>;
}
