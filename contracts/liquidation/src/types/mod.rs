pub mod account_state;
pub mod claim_orientation;
pub mod fcash_context;
pub mod rate_oracle;
pub mod solvency_checker;
