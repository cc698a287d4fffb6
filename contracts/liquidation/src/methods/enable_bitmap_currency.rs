use liquidation_interface::types::error::Error;
use soroban_sdk::{assert_with_error, Address, Env};

use crate::event;
use crate::types::account_state::AccountState;

use super::utils::validation::require_valid_currency;

pub fn enable_bitmap_currency(env: &Env, account: &Address, currency: u32) -> Result<(), Error> {
    account.require_auth();
    require_valid_currency(env, currency);

    let mut account_state = AccountState::load(env, account);

    assert_with_error!(
        env,
        !account_state.context.is_bitmap_enabled(),
        Error::BitmapCurrencyAlreadySet
    );
    assert_with_error!(
        env,
        account_state.assets.is_empty(),
        Error::BitmapHasListAssets
    );

    account_state.context.bitmap_currency = currency;
    account_state.write(env);

    event::bitmap_enabled(env, account, currency);

    Ok(())
}
