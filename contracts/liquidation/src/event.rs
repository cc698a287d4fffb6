use liquidation_interface::types::liquidation_config::LiquidationConfig;
use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

pub(crate) fn initialized(
    e: &Env,
    admin: &Address,
    free_collateral: &Address,
    market_oracle: &Address,
) {
    let topics = (Symbol::new(e, "initialize"), admin, free_collateral);
    e.events().publish(topics, market_oracle.clone());
}

pub(crate) fn liquidation_config_change(e: &Env, config: &LiquidationConfig) {
    let topics = (Symbol::new(e, "liquidation_config_change"),);
    e.events().publish(
        topics,
        (config.liquidation_dust, config.default_liquidation_portion),
    );
}

pub(crate) fn transfer_fee_change(e: &Env, currency: u32, has_fee: bool) {
    let topics = (Symbol::new(e, "transfer_fee_change"), currency);
    e.events().publish(topics, has_fee);
}

pub(crate) fn bitmap_enabled(e: &Env, account: &Address, currency: u32) {
    let topics = (Symbol::new(e, "bitmap_enabled"), account.clone());
    e.events().publish(topics, currency);
}

pub(crate) fn account_settled(e: &Env, account: &Address, settled_assets: u32) {
    let topics = (symbol_short!("settled"), account.clone());
    e.events().publish(topics, settled_assets);
}

pub(crate) fn fcash_local_liquidation(
    e: &Env,
    account: &Address,
    liquidator: &Address,
    local_currency: u32,
    net_local_from_liquidator: i128,
    transfers: &Vec<i128>,
) {
    let topics = (
        Symbol::new(e, "fcash_local_liquidation"),
        account.clone(),
        liquidator.clone(),
    );
    e.events().publish(
        topics,
        (local_currency, net_local_from_liquidator, transfers.clone()),
    );
}

pub(crate) fn fcash_cross_liquidation(
    e: &Env,
    account: &Address,
    liquidator: &Address,
    local_currency: u32,
    collateral_currency: u32,
    net_local_from_liquidator: i128,
    transfers: &Vec<i128>,
) {
    let topics = (
        Symbol::new(e, "fcash_cross_liquidation"),
        account.clone(),
        liquidator.clone(),
    );
    e.events().publish(
        topics,
        (
            local_currency,
            collateral_currency,
            net_local_from_liquidator,
            transfers.clone(),
        ),
    );
}
