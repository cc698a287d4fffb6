use soroban_sdk::contracttype;

use super::asset_rate::AssetRate;

/// Risk parameters of the currency whose fCash is being liquidated.
/// Spreads are expressed in basis points of annualized rate.
#[contracttype]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CashGroupParams {
    pub currency: u32,
    pub asset_rate: AssetRate,
    pub fcash_haircut: u32,
    pub liquidation_fcash_haircut: u32,
    pub debt_buffer: u32,
    pub liquidation_debt_buffer: u32,
}
