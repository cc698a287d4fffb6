#![deny(warnings)]
#![no_std]

use market_oracle_interface::MarketOracleTrait;
use soroban_sdk::{contract, contractclient, contractimpl, Env};

use crate::storage::*;

mod storage;

#[contractclient(name = "MarketOracleAdminClient")]
pub trait MarketOracleAdminTrait {
    /// Sets a flat curve for `currency`
    fn set_oracle_rate(env: Env, currency: u32, rate: i128);

    fn set_maturity_rate(env: Env, currency: u32, maturity: u64, rate: i128);

    fn set_settlement_rate(env: Env, currency: u32, maturity: u64, rate: i128);
}

#[contract]
pub struct MarketOracleMock;

#[contractimpl]
impl MarketOracleTrait for MarketOracleMock {
    fn oracle_rate(env: Env, currency: u32, maturity: u64, block_time: u64) -> Option<i128> {
        if maturity < block_time {
            return None;
        }

        read_oracle_rate(&env, currency, maturity)
    }

    fn settlement_rate(env: Env, currency: u32, maturity: u64) -> Option<i128> {
        read_settlement_rate(&env, currency, maturity)
    }
}

#[contractimpl]
impl MarketOracleAdminTrait for MarketOracleMock {
    fn set_oracle_rate(env: Env, currency: u32, rate: i128) {
        write_oracle_rate(&env, currency, rate);
    }

    fn set_maturity_rate(env: Env, currency: u32, maturity: u64, rate: i128) {
        write_maturity_rate(&env, currency, maturity, rate);
    }

    fn set_settlement_rate(env: Env, currency: u32, maturity: u64, rate: i128) {
        write_settlement_rate(&env, currency, maturity, rate);
    }
}
