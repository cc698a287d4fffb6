use soroban_sdk::{Address, Env};

use crate::types::account_state::AccountState;

pub fn fcash_notional(env: &Env, account: &Address, currency: u32, maturity: u64) -> i128 {
    AccountState::load(env, account).fcash_notional(currency, maturity)
}
