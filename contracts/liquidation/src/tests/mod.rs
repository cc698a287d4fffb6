
mod account_state;
mod discount_factors;
mod liquidate_cross_fcash;
mod set_transfer_fee;
