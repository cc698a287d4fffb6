use soroban_sdk::contracttype;

use super::asset_rate::AssetRate;
use super::cash_group_params::CashGroupParams;
use super::eth_rate::ETHRate;

#[contracttype]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LiquidationFactors {
    /// Risk adjusted local currency balance in asset units
    pub local_asset_available: i128,
    /// Risk adjusted collateral currency balance in asset units
    pub collateral_asset_available: i128,
    /// Net risk adjusted value of the account in the reference unit
    pub net_eth_value: i128,
    pub local_eth_rate: ETHRate,
    pub collateral_eth_rate: ETHRate,
    pub local_asset_rate: AssetRate,
    /// Collateral currency cash group, or the local one for local liquidations
    pub cash_group: CashGroupParams,
}
