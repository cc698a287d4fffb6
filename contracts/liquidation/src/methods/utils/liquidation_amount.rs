use common::FixedI128;
use liquidation_interface::types::error::Error;

/// Caps the amount a liquidator may take from a position of `max_total`.
///
/// The amount `required` to restore collateral is bounded by the position itself,
/// raised to the default liquidation portion when smaller, then bounded by the
/// liquidator's own maximum when it is positive.
pub fn calculate_liquidation_amount(
    required: i128,
    max_total: i128,
    liquidator_max: i128,
    default_liquidation_portion: u32,
) -> Result<i128, Error> {
    let default_allowed = FixedI128::from_percentage(default_liquidation_portion)
        .and_then(|portion| portion.mul_int(max_total))
        .ok_or(Error::LiquidationMathError)?;

    let mut allowed = required;
    if required > max_total {
        allowed = max_total;
    } else if required < default_allowed {
        allowed = default_allowed;
    }

    if liquidator_max > 0 && allowed > liquidator_max {
        allowed = liquidator_max;
    }

    Ok(allowed)
}
