use free_collateral_interface::types::liquidation_factors::LiquidationFactors;
use soroban_sdk::{contracttype, Address, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Factors(Address, u32, u32),
    FreeCollateral(Address),
}

pub fn write_factors(
    env: &Env,
    account: &Address,
    local_currency: u32,
    collateral_currency: u32,
    factors: &LiquidationFactors,
) {
    let key = DataKey::Factors(account.clone(), local_currency, collateral_currency);
    env.storage().instance().set(&key, factors);
}

pub fn read_factors(
    env: &Env,
    account: &Address,
    local_currency: u32,
    collateral_currency: u32,
) -> Option<LiquidationFactors> {
    let key = DataKey::Factors(account.clone(), local_currency, collateral_currency);
    env.storage().instance().get(&key)
}

pub fn write_free_collateral(env: &Env, account: &Address, value: i128) {
    let key = DataKey::FreeCollateral(account.clone());
    env.storage().instance().set(&key, &value);
}

pub fn read_free_collateral(env: &Env, account: &Address) -> i128 {
    let key = DataKey::FreeCollateral(account.clone());
    env.storage().instance().get(&key).unwrap_or(0)
}
