pub mod asset_rate;
pub mod cash_group_params;
pub mod eth_rate;
pub mod liquidation_factors;
