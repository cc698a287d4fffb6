use soroban_sdk::contracttype;

#[contracttype]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u32)]
pub enum AssetType {
    FCash = 1,
}

#[contracttype]
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PortfolioAsset {
    pub currency: u32,
    pub maturity: u64,
    pub asset_type: AssetType,
    /// Positive for lender positions, negative for debt
    pub notional: i128,
}

impl PortfolioAsset {
    pub fn fcash(currency: u32, maturity: u64, notional: i128) -> Self {
        Self {
            currency,
            maturity,
            asset_type: AssetType::FCash,
            notional,
        }
    }

    pub fn is_fcash_at(&self, currency: u32, maturity: u64) -> bool {
        self.asset_type == AssetType::FCash && self.currency == currency && self.maturity == maturity
    }
}
