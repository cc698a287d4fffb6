use soroban_sdk::contracttype;

pub const HAS_ASSET_DEBT: u32 = 0b01;
pub const HAS_CASH_DEBT: u32 = 0b10;

#[contracttype]
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct AccountContext {
    /// Earliest maturity held by the account, zero when nothing to settle
    pub next_settle_time: u64,
    /// Bitmask of HAS_ASSET_DEBT and HAS_CASH_DEBT
    pub has_debt: u32,
    /// Currency whose fCash is kept as a maturity bitmap, zero when disabled
    pub bitmap_currency: u32,
}

impl AccountContext {
    pub fn is_bitmap_enabled(&self) -> bool {
        self.bitmap_currency != 0
    }

    pub fn has_any_debt(&self) -> bool {
        self.has_debt != 0
    }

    pub fn must_settle(&self, block_time: u64) -> bool {
        self.next_settle_time != 0 && self.next_settle_time <= block_time
    }

    pub fn set_asset_debt(&mut self, has_debt: bool) {
        self.set_flag(HAS_ASSET_DEBT, has_debt);
    }

    pub fn set_cash_debt(&mut self, has_debt: bool) {
        self.set_flag(HAS_CASH_DEBT, has_debt);
    }

    fn set_flag(&mut self, flag: u32, enabled: bool) {
        if enabled {
            self.has_debt |= flag;
        } else {
            self.has_debt &= !flag;
        }
    }
}
