use liquidation_interface::types::error::Error;
use liquidation_interface::types::liquidation_config::LiquidationConfig;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{
    write_admin, write_free_collateral, write_liquidation_config, write_market_oracle,
};

use super::utils::validation::{require_admin_not_exist, require_valid_liquidation_config};

pub fn initialize(
    env: &Env,
    admin: &Address,
    free_collateral: &Address,
    market_oracle: &Address,
    config: &LiquidationConfig,
) -> Result<(), Error> {
    require_admin_not_exist(env);
    require_valid_liquidation_config(env, config);

    write_admin(env, admin);
    write_free_collateral(env, free_collateral);
    write_market_oracle(env, market_oracle);
    write_liquidation_config(env, config);

    event::initialized(env, admin, free_collateral, market_oracle);

    Ok(())
}
