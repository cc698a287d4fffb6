use liquidation_interface::types::account_context::{HAS_ASSET_DEBT, HAS_CASH_DEBT};
use liquidation_interface::types::portfolio_asset::PortfolioAsset;
use soroban_sdk::{vec, Env};

use crate::tests::sut::{
    account_state, flat_rate_oracle, maturity, FlatRateOracle, COLLATERAL_CURRENCY, DAY,
    LOCAL_CURRENCY, ONE, ORACLE_RATE, START_TIME,
};

#[test]
fn should_net_positions_at_same_maturity() {
    let env = Env::default();
    let mut state = account_state(&env, &[(LOCAL_CURRENCY, maturity(90), 500)], &[]);

    state
        .add_assets(&vec![
            &env,
            PortfolioAsset::fcash(LOCAL_CURRENCY, maturity(90), -200),
        ])
        .unwrap();

    assert_eq!(state.assets.len(), 1);
    assert_eq!(state.fcash_notional(LOCAL_CURRENCY, maturity(90)), 300);
}

#[test]
fn should_remove_closed_positions() {
    let env = Env::default();
    let mut state = account_state(&env, &[(LOCAL_CURRENCY, maturity(90), 500)], &[]);

    state
        .add_assets(&vec![
            &env,
            PortfolioAsset::fcash(LOCAL_CURRENCY, maturity(90), -500),
        ])
        .unwrap();

    assert!(state.assets.is_empty());
    assert_eq!(state.context.next_settle_time, 0);
}

#[test]
fn should_keep_currencies_apart() {
    let env = Env::default();
    let state = account_state(
        &env,
        &[
            (LOCAL_CURRENCY, maturity(90), 500),
            (COLLATERAL_CURRENCY, maturity(90), 700),
        ],
        &[],
    );

    assert_eq!(state.fcash_notional(LOCAL_CURRENCY, maturity(90)), 500);
    assert_eq!(state.fcash_notional(COLLATERAL_CURRENCY, maturity(90)), 700);
    assert_eq!(state.fcash_notional(LOCAL_CURRENCY, maturity(30)), 0);
}

#[test]
fn should_track_debt_flags_and_next_settle_time() {
    let env = Env::default();
    let mut state = account_state(
        &env,
        &[
            (LOCAL_CURRENCY, maturity(180), 500),
            (LOCAL_CURRENCY, maturity(90), -100),
        ],
        &[],
    );

    assert_eq!(state.context.next_settle_time, maturity(90));
    assert_eq!(state.context.has_debt, HAS_ASSET_DEBT);

    state.set_cash_balance(LOCAL_CURRENCY, -1);
    assert_eq!(state.context.has_debt, HAS_ASSET_DEBT | HAS_CASH_DEBT);

    state.set_cash_balance(LOCAL_CURRENCY, 10);
    state
        .add_assets(&vec![
            &env,
            PortfolioAsset::fcash(LOCAL_CURRENCY, maturity(90), 100),
        ])
        .unwrap();

    assert_eq!(state.context.has_debt, 0);
    assert_eq!(state.context.next_settle_time, maturity(180));
}

#[test]
fn should_settle_matured_positions_into_cash() {
    let env = Env::default();
    let mut state = account_state(
        &env,
        &[
            (LOCAL_CURRENCY, START_TIME + DAY, 1_000),
            (LOCAL_CURRENCY, maturity(90), 200),
        ],
        &[(LOCAL_CURRENCY, 50)],
    );
    // two underlying per asset unit
    let oracle = FlatRateOracle {
        rate: ORACLE_RATE,
        settlement_rate: 2 * ONE,
    };

    let settled = state.settle(&env, &oracle, START_TIME + 2 * DAY).unwrap();

    assert_eq!(settled, 1);
    assert_eq!(state.cash_balance(LOCAL_CURRENCY), 550);
    assert_eq!(state.fcash_notional(LOCAL_CURRENCY, START_TIME + DAY), 0);
    assert_eq!(state.context.next_settle_time, maturity(90));
}

#[test]
fn should_settle_debt_into_negative_cash() {
    let env = Env::default();
    let mut state = account_state(&env, &[(LOCAL_CURRENCY, START_TIME, -300)], &[]);

    let settled = state
        .settle(&env, &flat_rate_oracle(), START_TIME)
        .unwrap();

    assert_eq!(settled, 1);
    assert_eq!(state.cash_balance(LOCAL_CURRENCY), -300);
    assert_eq!(state.context.has_debt, HAS_CASH_DEBT);
    assert_eq!(state.context.next_settle_time, 0);
}

#[test]
fn should_not_settle_before_maturity() {
    let env = Env::default();
    let mut state = account_state(&env, &[(LOCAL_CURRENCY, maturity(90), 200)], &[]);

    let settled = state
        .settle(&env, &flat_rate_oracle(), START_TIME)
        .unwrap();

    assert_eq!(settled, 0);
    assert_eq!(state.assets.len(), 1);
    assert_eq!(state.cash_balance(LOCAL_CURRENCY), 0);
}

#[test]
fn should_keep_bitmap_currency_in_bitmap() {
    let env = Env::default();
    let mut state = account_state(&env, &[], &[]);
    state.context.bitmap_currency = LOCAL_CURRENCY;

    state
        .add_assets(&vec![
            &env,
            PortfolioAsset::fcash(LOCAL_CURRENCY, maturity(90), 500),
            PortfolioAsset::fcash(COLLATERAL_CURRENCY, maturity(90), 700),
        ])
        .unwrap();

    assert_eq!(state.bitmap.len(), 1);
    assert_eq!(state.assets.len(), 1);
    assert_eq!(state.fcash_notional(LOCAL_CURRENCY, maturity(90)), 500);
    assert_eq!(state.fcash_notional(COLLATERAL_CURRENCY, maturity(90)), 700);
}

#[test]
fn should_settle_bitmap_positions() {
    let env = Env::default();
    let mut state = account_state(&env, &[], &[]);
    state.context.bitmap_currency = LOCAL_CURRENCY;

    state
        .add_assets(&vec![
            &env,
            PortfolioAsset::fcash(LOCAL_CURRENCY, START_TIME + DAY, 400),
            PortfolioAsset::fcash(LOCAL_CURRENCY, maturity(90), 500),
        ])
        .unwrap();

    let settled = state
        .settle(&env, &flat_rate_oracle(), START_TIME + DAY)
        .unwrap();

    assert_eq!(settled, 1);
    assert_eq!(state.cash_balance(LOCAL_CURRENCY), 400);
    assert_eq!(state.bitmap.len(), 1);
    assert_eq!(state.context.next_settle_time, maturity(90));
}
