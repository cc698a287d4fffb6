use soroban_sdk::testutils::{Address as _, AuthorizedFunction, Events};
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use crate::tests::sut::{
    cross_factors, init_liquidation, local_factors, maturity, Sut, COLLATERAL_CURRENCY,
    LOCAL_CURRENCY,
};

/// Account with local debt backed by collateral currency fCash
fn fill_collateral_claim(env: &Env, sut: &Sut) -> (Address, Address) {
    let account = Address::generate(env);
    let liquidator = Address::generate(env);

    sut.fund_account(
        env,
        &account,
        &[(COLLATERAL_CURRENCY, maturity(90), 500)],
        &[(LOCAL_CURRENCY, -100)],
    );
    sut.fund_account(env, &liquidator, &[], &[(LOCAL_CURRENCY, 1_000)]);
    sut.free_collateral.set_liquidation_factors(
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &cross_factors(-100, 1_000, -50),
    );

    (account, liquidator)
}

#[test]
fn should_require_authorized_liquidator() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    let maturities = vec![&env, maturity(90)];
    let max_amounts = vec![&env, 0i128];

    sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &maturities,
        &max_amounts,
    );

    assert_eq!(
        env.auths().pop().map(|f| f.1.function).unwrap(),
        AuthorizedFunction::Contract((
            sut.liquidation.address.clone(),
            Symbol::new(&env, "liquidate_cross_fcash"),
            (
                liquidator.clone(),
                account.clone(),
                LOCAL_CURRENCY,
                COLLATERAL_CURRENCY,
                maturities,
                max_amounts
            )
                .into_val(&env)
        )),
    );
}

#[test]
fn should_exchange_collateral_fcash_for_local_cash() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    let result = sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &vec![&env, maturity(90)],
        &vec![&env, 0],
    );

    assert_eq!(result.transfers, vec![&env, 109]);
    assert_eq!(result.net_local_from_liquidator, 100);

    assert_eq!(
        sut.liquidation
            .fcash_notional(&account, &COLLATERAL_CURRENCY, &maturity(90)),
        391
    );
    assert_eq!(
        sut.liquidation.cash_balances(&account).get(LOCAL_CURRENCY),
        None
    );
    assert!(!sut.liquidation.account_context(&account).has_any_debt());

    assert_eq!(
        sut.liquidation
            .fcash_notional(&liquidator, &COLLATERAL_CURRENCY, &maturity(90)),
        109
    );
    assert_eq!(
        sut.liquidation
            .cash_balances(&liquidator)
            .get(LOCAL_CURRENCY),
        Some(900)
    );
}

#[test]
fn should_preview_without_changing_state() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    let maturities = vec![&env, maturity(90)];
    let max_amounts = vec![&env, 50];

    let preview = sut.liquidation.calc_cross_fcash(
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &maturities,
        &max_amounts,
    );

    assert_eq!(preview.transfers, vec![&env, 50]);
    assert_eq!(
        sut.liquidation
            .fcash_notional(&account, &COLLATERAL_CURRENCY, &maturity(90)),
        500
    );

    let result = sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &maturities,
        &max_amounts,
    );

    assert_eq!(result, preview);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_for_same_currency() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &LOCAL_CURRENCY,
        &vec![&env, maturity(90)],
        &vec![&env, 0],
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_for_zero_collateral_currency() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &0,
        &vec![&env, maturity(90)],
        &vec![&env, 0],
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_when_factors_priced_in_local_currency() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    sut.free_collateral.set_liquidation_factors(
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &local_factors(-100, -50),
    );

    sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &vec![&env, maturity(90)],
        &vec![&env, 0],
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #109)")]
fn should_fail_without_local_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    sut.free_collateral.set_liquidation_factors(
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &cross_factors(10, 1_000, -50),
    );

    sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &vec![&env, maturity(90)],
        &vec![&env, 0],
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #110)")]
fn should_fail_without_collateral_available() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    sut.free_collateral.set_liquidation_factors(
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &cross_factors(-100, 0, -50),
    );

    sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &vec![&env, maturity(90)],
        &vec![&env, 0],
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #111)")]
fn should_fail_on_collateral_debt() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    sut.fund_account(
        &env,
        &account,
        &[(COLLATERAL_CURRENCY, maturity(180), -300)],
        &[],
    );

    sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &vec![&env, maturity(180)],
        &vec![&env, 0],
    );
}

#[test]
fn should_emit_event() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);
    let (account, liquidator) = fill_collateral_claim(&env, &sut);

    let result = sut.liquidation.liquidate_cross_fcash(
        &liquidator,
        &account,
        &LOCAL_CURRENCY,
        &COLLATERAL_CURRENCY,
        &vec![&env, maturity(90)],
        &vec![&env, 0],
    );

    let mut events = env.events().all();
    let event = events.pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.liquidation.address.clone(),
                (
                    Symbol::new(&env, "fcash_cross_liquidation"),
                    account.clone(),
                    liquidator.clone()
                )
                    .into_val(&env),
                (
                    LOCAL_CURRENCY,
                    COLLATERAL_CURRENCY,
                    result.net_local_from_liquidator,
                    result.transfers
                )
                    .into_val(&env)
            ),
        ]
    );
}
