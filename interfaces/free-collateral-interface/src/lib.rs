#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::liquidation_factors::LiquidationFactors;

pub mod types;

pub struct Spec;

/// Free collateral engine interface description
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "FreeCollateralClient")]
pub trait FreeCollateralTrait {
    /// Returns the factors used to liquidate `account` in `local_currency` against
    /// `collateral_currency`. `collateral_currency` is zero for local liquidations.
    /// Pending maturities of the account must be settled before the factors are built.
    fn liquidation_factors(
        env: Env,
        account: Address,
        local_currency: u32,
        collateral_currency: u32,
    ) -> Option<LiquidationFactors>;

    /// Returns risk adjusted net value of the account expressed in the reference unit
    fn free_collateral(env: Env, account: Address) -> i128;
}
