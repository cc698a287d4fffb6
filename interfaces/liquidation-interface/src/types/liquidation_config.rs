use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LiquidationConfig {
    /// Residual benefit, in underlying units, below which allocation stops
    pub liquidation_dust: i128,
    /// Share of a position a liquidator may always purchase [0%, 100%]
    pub default_liquidation_portion: u32,
}
