use free_collateral_interface::types::liquidation_factors::LiquidationFactors;
use liquidation_interface::types::fcash_liquidation::FCashLiquidation;
use soroban_sdk::{Env, Vec};

use super::account_state::AccountState;

/// Working state of a single fCash liquidation
pub struct FCashContext {
    pub account: AccountState,
    pub factors: LiquidationFactors,
    /// Running local cash balance of the account in underlying units
    pub local_cash_balance_underlying: i128,
    /// Residual benefit still to be produced by the allocation
    pub benefit_required: i128,
    pub local_asset_cash_from_liquidator: i128,
    pub liquidation_discount: u32,
    pub fcash_notional_transfers: Vec<i128>,
}

impl FCashContext {
    pub fn new(
        env: &Env,
        account: AccountState,
        factors: LiquidationFactors,
        maturities_count: u32,
    ) -> Self {
        let mut fcash_notional_transfers = Vec::new(env);
        for _ in 0..maturities_count {
            fcash_notional_transfers.push_back(0);
        }

        Self {
            account,
            factors,
            local_cash_balance_underlying: 0,
            benefit_required: 0,
            local_asset_cash_from_liquidator: 0,
            liquidation_discount: 0,
            fcash_notional_transfers,
        }
    }

    pub fn result(&self) -> FCashLiquidation {
        FCashLiquidation {
            transfers: self.fcash_notional_transfers.clone(),
            net_local_from_liquidator: self.local_asset_cash_from_liquidator,
        }
    }
}
