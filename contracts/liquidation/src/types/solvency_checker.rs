use free_collateral_interface::types::liquidation_factors::LiquidationFactors;
use free_collateral_interface::FreeCollateralClient;
use liquidation_interface::types::error::Error;
use soroban_sdk::{Address, Env};

use crate::storage::read_free_collateral;

pub trait SolvencyChecker {
    /// Fails when `account` has negative free collateral
    fn check_and_fail(&self, account: &Address) -> Result<(), Error>;
}

pub struct FreeCollateralEngine<'a> {
    client: FreeCollateralClient<'a>,
}

impl<'a> FreeCollateralEngine<'a> {
    pub fn new(env: &'a Env) -> Result<Self, Error> {
        let address = read_free_collateral(env)?;

        Ok(Self {
            client: FreeCollateralClient::new(env, &address),
        })
    }

    pub fn liquidation_factors(
        &self,
        account: &Address,
        local_currency: u32,
        collateral_currency: u32,
    ) -> Result<LiquidationFactors, Error> {
        self.client
            .liquidation_factors(account, &local_currency, &collateral_currency)
            .ok_or(Error::NoLiquidationFactors)
    }
}

impl SolvencyChecker for FreeCollateralEngine<'_> {
    fn check_and_fail(&self, account: &Address) -> Result<(), Error> {
        if self.client.free_collateral(account).is_negative() {
            return Err(Error::InsufficientFreeCollateral);
        }

        Ok(())
    }
}
