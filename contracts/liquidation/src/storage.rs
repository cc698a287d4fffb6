use liquidation_interface::types::account_context::AccountContext;
use liquidation_interface::types::error::Error;
use liquidation_interface::types::liquidation_config::LiquidationConfig;
use liquidation_interface::types::portfolio_asset::PortfolioAsset;
use soroban_sdk::{contracttype, vec, Address, Env, Map, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    FreeCollateral,
    MarketOracle,
    LiquidationConfig,
    TransferFee(u32),
    AccountContext(Address),
    CashBalances(Address),
    Portfolio(Address),
    Bitmap(Address, u32),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

fn read_user_data<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);

    if value.is_some() {
        env.storage().persistent().extend_ttl(
            key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    value
}

fn write_user_data<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage().persistent().extend_ttl(
        key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn has_admin(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Admin)
}

pub fn write_admin(env: &Env, admin: &Address) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn read_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::Uninitialized)
}

pub fn write_free_collateral(env: &Env, free_collateral: &Address) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::FreeCollateral, free_collateral);
}

pub fn read_free_collateral(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::FreeCollateral)
        .ok_or(Error::Uninitialized)
}

pub fn write_market_oracle(env: &Env, market_oracle: &Address) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::MarketOracle, market_oracle);
}

pub fn read_market_oracle(env: &Env) -> Result<Address, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::MarketOracle)
        .ok_or(Error::Uninitialized)
}

pub fn write_liquidation_config(env: &Env, config: &LiquidationConfig) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::LiquidationConfig, config);
}

pub fn read_liquidation_config(env: &Env) -> Result<LiquidationConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::LiquidationConfig)
        .ok_or(Error::Uninitialized)
}

pub fn write_transfer_fee(env: &Env, currency: u32, has_fee: bool) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::TransferFee(currency), &has_fee);
}

pub fn read_transfer_fee(env: &Env, currency: u32) -> bool {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::TransferFee(currency))
        .unwrap_or(false)
}

pub fn read_account_context(env: &Env, account: &Address) -> AccountContext {
    read_user_data(env, &DataKey::AccountContext(account.clone())).unwrap_or_default()
}

pub fn write_account_context(env: &Env, account: &Address, context: &AccountContext) {
    write_user_data(env, &DataKey::AccountContext(account.clone()), context);
}

pub fn read_cash_balances(env: &Env, account: &Address) -> Map<u32, i128> {
    read_user_data(env, &DataKey::CashBalances(account.clone())).unwrap_or(Map::new(env))
}

pub fn write_cash_balances(env: &Env, account: &Address, balances: &Map<u32, i128>) {
    write_user_data(env, &DataKey::CashBalances(account.clone()), balances);
}

pub fn read_portfolio(env: &Env, account: &Address) -> Vec<PortfolioAsset> {
    read_user_data(env, &DataKey::Portfolio(account.clone())).unwrap_or(vec![env])
}

pub fn write_portfolio(env: &Env, account: &Address, assets: &Vec<PortfolioAsset>) {
    write_user_data(env, &DataKey::Portfolio(account.clone()), assets);
}

/// Maturity to notional map of the account bitmap currency
pub fn read_bitmap(env: &Env, account: &Address, currency: u32) -> Map<u64, i128> {
    read_user_data(env, &DataKey::Bitmap(account.clone(), currency)).unwrap_or(Map::new(env))
}

pub fn write_bitmap(env: &Env, account: &Address, currency: u32, bitmap: &Map<u64, i128>) {
    write_user_data(env, &DataKey::Bitmap(account.clone(), currency), bitmap);
}
