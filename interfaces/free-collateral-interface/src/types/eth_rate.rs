use common::FixedI128;
use soroban_sdk::contracttype;

/// Valuation of a currency in the reference unit together with its risk parameters
#[contracttype]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ETHRate {
    /// Reference unit value of one underlying unit, fixed with denominator 10e9
    pub rate: i128,
    /// Multiplier applied to debts [100%, ...)
    pub buffer: u32,
    /// Specifies what fraction of the currency counts toward collateral [0%, 100%]
    pub haircut: u32,
    /// Premium a liquidator receives when purchasing this currency [100%, ...)
    pub liquidation_discount: u32,
}

impl ETHRate {
    /// Converts a reference unit amount into underlying units of the currency
    pub fn convert_eth_to(&self, eth_amount: i128) -> Option<i128> {
        FixedI128::from_inner(self.rate).recip_mul_int(eth_amount)
    }

    /// Units of `quote` currency per one unit of self
    pub fn exchange_rate(&self, quote: &ETHRate) -> Option<FixedI128> {
        FixedI128::from_inner(self.rate).checked_div(FixedI128::from_inner(quote.rate))
    }
}
