pub mod account_context;
pub mod error;
pub mod fcash_liquidation;
pub mod liquidation_config;
pub mod portfolio_asset;
