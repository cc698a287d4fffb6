use soroban_sdk::{contracttype, Env};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    OracleRate(u32),
    MaturityRate(u32, u64),
    SettlementRate(u32, u64),
}

pub fn write_oracle_rate(env: &Env, currency: u32, rate: i128) {
    env.storage()
        .instance()
        .set(&DataKey::OracleRate(currency), &rate);
}

pub fn write_maturity_rate(env: &Env, currency: u32, maturity: u64, rate: i128) {
    env.storage()
        .instance()
        .set(&DataKey::MaturityRate(currency, maturity), &rate);
}

/// Rate set for the exact maturity wins over the flat currency rate
pub fn read_oracle_rate(env: &Env, currency: u32, maturity: u64) -> Option<i128> {
    env.storage()
        .instance()
        .get(&DataKey::MaturityRate(currency, maturity))
        .or_else(|| env.storage().instance().get(&DataKey::OracleRate(currency)))
}

pub fn write_settlement_rate(env: &Env, currency: u32, maturity: u64, rate: i128) {
    env.storage()
        .instance()
        .set(&DataKey::SettlementRate(currency, maturity), &rate);
}

pub fn read_settlement_rate(env: &Env, currency: u32, maturity: u64) -> Option<i128> {
    env.storage()
        .instance()
        .get(&DataKey::SettlementRate(currency, maturity))
}
