use liquidation_interface::types::error::Error;
use soroban_sdk::Env;

use crate::event;
use crate::storage::write_transfer_fee;

use super::utils::validation::{require_admin, require_valid_currency};

pub fn set_transfer_fee(env: &Env, currency: u32, has_fee: bool) -> Result<(), Error> {
    require_admin(env)?;
    require_valid_currency(env, currency);

    write_transfer_fee(env, currency, has_fee);

    event::transfer_fee_change(env, currency, has_fee);

    Ok(())
}
