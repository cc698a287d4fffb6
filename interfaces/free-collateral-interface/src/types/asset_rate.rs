use common::FixedI128;
use soroban_sdk::contracttype;

/// Conversion between the internal asset unit of a currency and its underlying unit
#[contracttype]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AssetRate {
    /// Underlying per one asset unit, fixed with denominator 10e9
    pub rate: i128,
}

impl AssetRate {
    pub fn new(rate: i128) -> Self {
        Self { rate }
    }

    pub fn convert_to_underlying(&self, asset_amount: i128) -> Option<i128> {
        FixedI128::from_inner(self.rate).mul_int(asset_amount)
    }

    pub fn convert_from_underlying(&self, underlying_amount: i128) -> Option<i128> {
        FixedI128::from_inner(self.rate).recip_mul_int(underlying_amount)
    }
}
