#![deny(warnings)]
#![no_std]

use free_collateral_interface::types::liquidation_factors::LiquidationFactors;
use free_collateral_interface::FreeCollateralTrait;
use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};
use storage::{read_factors, read_free_collateral, write_factors, write_free_collateral};

mod storage;

#[contractclient(name = "FreeCollateralAdminClient")]
pub trait FreeCollateralAdminTrait {
    fn set_liquidation_factors(
        env: Env,
        account: Address,
        local_currency: u32,
        collateral_currency: u32,
        factors: LiquidationFactors,
    );

    fn set_free_collateral(env: Env, account: Address, value: i128);
}

#[contract]
pub struct FreeCollateralMock;

#[contractimpl]
impl FreeCollateralTrait for FreeCollateralMock {
    fn liquidation_factors(
        env: Env,
        account: Address,
        local_currency: u32,
        collateral_currency: u32,
    ) -> Option<LiquidationFactors> {
        read_factors(&env, &account, local_currency, collateral_currency)
    }

    fn free_collateral(env: Env, account: Address) -> i128 {
        read_free_collateral(&env, &account)
    }
}

#[contractimpl]
impl FreeCollateralAdminTrait for FreeCollateralMock {
    fn set_liquidation_factors(
        env: Env,
        account: Address,
        local_currency: u32,
        collateral_currency: u32,
        factors: LiquidationFactors,
    ) {
        write_factors(&env, &account, local_currency, collateral_currency, &factors);
    }

    fn set_free_collateral(env: Env, account: Address, value: i128) {
        write_free_collateral(&env, &account, value);
    }
}
