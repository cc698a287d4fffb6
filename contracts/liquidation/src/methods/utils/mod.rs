pub mod benefit;
pub mod cross_currency_fcash;
pub mod discount_factors;
pub mod fcash_context;
pub mod finalize_fcash;
pub mod liquidation_amount;
pub mod local_fcash;
pub mod validation;
