use soroban_sdk::testutils::{AuthorizedFunction, Events};
use soroban_sdk::{vec, Env, IntoVal, Symbol};

use crate::tests::sut::{init_liquidation, LOCAL_CURRENCY};

#[test]
fn should_require_admin() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);

    sut.liquidation.set_transfer_fee(&LOCAL_CURRENCY, &true);

    assert_eq!(
        env.auths().pop().map(|f| f.1.function).unwrap(),
        AuthorizedFunction::Contract((
            sut.liquidation.address.clone(),
            Symbol::new(&env, "set_transfer_fee"),
            (LOCAL_CURRENCY, true).into_val(&env)
        )),
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_for_zero_currency() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);

    sut.liquidation.set_transfer_fee(&0, &true);
}

#[test]
fn should_emit_event() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_liquidation(&env);

    sut.liquidation.set_transfer_fee(&LOCAL_CURRENCY, &true);

    let mut events = env.events().all();
    let event = events.pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                sut.liquidation.address.clone(),
                (Symbol::new(&env, "transfer_fee_change"), LOCAL_CURRENCY).into_val(&env),
                true.into_val(&env)
            ),
        ]
    );
}
