use common::PERCENTAGE_FACTOR;
use liquidation_interface::types::error::Error;
use liquidation_interface::types::liquidation_config::LiquidationConfig;
use soroban_sdk::{assert_with_error, panic_with_error, Address, Env, Vec};

use crate::storage::{has_admin, read_admin};

pub fn require_admin_not_exist(env: &Env) {
    if has_admin(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_admin(env: &Env) -> Result<(), Error> {
    let admin: Address = read_admin(env)?;
    admin.require_auth();
    Ok(())
}

pub fn require_valid_liquidation_config(env: &Env, config: &LiquidationConfig) {
    assert_with_error!(
        env,
        config.liquidation_dust >= 0,
        Error::InvalidLiquidationConfig
    );
    assert_with_error!(
        env,
        config.default_liquidation_portion > 0
            && config.default_liquidation_portion <= PERCENTAGE_FACTOR,
        Error::InvalidLiquidationConfig
    );
}

pub fn require_valid_currency(env: &Env, currency: u32) {
    assert_with_error!(env, currency != 0, Error::InvalidCurrency);
}

pub fn require_different_currencies(env: &Env, local_currency: u32, collateral_currency: u32) {
    assert_with_error!(
        env,
        local_currency != collateral_currency,
        Error::SameCurrency
    );
}

pub fn require_not_self_liquidation(env: &Env, liquidator: &Address, account: &Address) {
    assert_with_error!(env, liquidator != account, Error::SelfLiquidation);
}

/// Maturities must be unique and paired with non negative maximums
pub fn require_valid_liquidation_input(env: &Env, maturities: &Vec<u64>, max_amounts: &Vec<i128>) {
    assert_with_error!(
        env,
        maturities.len() == max_amounts.len(),
        Error::InputLengthMismatch
    );

    for max_amount in max_amounts.iter() {
        assert_with_error!(env, max_amount >= 0, Error::InvalidMaxAmount);
    }

    for (i, maturity) in maturities.iter().enumerate() {
        let duplicated = maturities.iter().skip(i + 1).any(|other| other == maturity);
        assert_with_error!(env, !duplicated, Error::DuplicateMaturity);
    }
}
