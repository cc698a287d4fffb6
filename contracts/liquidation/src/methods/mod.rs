pub mod enable_bitmap_currency;
pub mod fcash_notional;
pub mod initialize;
pub mod liquidate_cross_fcash;
pub mod liquidate_local_fcash;
pub mod set_liquidation_config;
pub mod set_transfer_fee;
pub mod settle_account;
pub mod utils;
