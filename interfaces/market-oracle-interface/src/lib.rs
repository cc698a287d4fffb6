#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env};

pub struct Spec;

/// Market oracle interface description.
/// Rates are annualized and fixed with denominator 10e9.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "MarketOracleClient")]
pub trait MarketOracleTrait {
    /// Oracle interest rate of `currency` for an fCash asset maturing at `maturity`
    fn oracle_rate(env: Env, currency: u32, maturity: u64, block_time: u64) -> Option<i128>;

    /// Asset rate fixed for fCash of `currency` that matured at `maturity`
    fn settlement_rate(env: Env, currency: u32, maturity: u64) -> Option<i128>;
}
