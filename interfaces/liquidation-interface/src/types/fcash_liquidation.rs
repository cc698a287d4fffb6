use soroban_sdk::{contracttype, Vec};

#[contracttype]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FCashLiquidation {
    /// Notional received by the liquidator, index aligned with the requested maturities
    pub transfers: Vec<i128>,
    /// Local currency paid by the liquidator in asset units, negative when received
    pub net_local_from_liquidator: i128,
}
