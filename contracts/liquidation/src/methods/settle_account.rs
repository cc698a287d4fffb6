use liquidation_interface::types::account_context::AccountContext;
use liquidation_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::types::account_state::AccountState;
use crate::types::rate_oracle::MarketOracle;

pub fn settle_account(env: &Env, account: &Address) -> Result<AccountContext, Error> {
    let oracle = MarketOracle::new(env)?;

    let mut account_state = AccountState::load(env, account);
    let settled = account_state.settle(env, &oracle, env.ledger().timestamp())?;

    if settled > 0 {
        account_state.write(env);
        event::account_settled(env, account, settled);
    }

    Ok(account_state.context)
}
