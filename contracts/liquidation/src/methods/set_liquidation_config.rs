use liquidation_interface::types::error::Error;
use liquidation_interface::types::liquidation_config::LiquidationConfig;
use soroban_sdk::Env;

use crate::event;
use crate::storage::write_liquidation_config;

use super::utils::validation::{require_admin, require_valid_liquidation_config};

pub fn set_liquidation_config(env: &Env, config: &LiquidationConfig) -> Result<(), Error> {
    require_admin(env)?;
    require_valid_liquidation_config(env, config);

    write_liquidation_config(env, config);

    event::liquidation_config_change(env, config);

    Ok(())
}
