use common::FixedI128;
use free_collateral_interface::types::eth_rate::ETHRate;
use free_collateral_interface::types::liquidation_factors::LiquidationFactors;
use liquidation_interface::types::error::Error;

/// Local currency benefit, in underlying units, a local liquidation has to produce.
///
/// A positive local balance means the shortfall sits elsewhere, so the whole
/// free collateral deficit is grossed up by the local haircut. A negative local
/// balance only needs to be brought back to zero.
pub fn local_benefit_required(factors: &LiquidationFactors) -> Result<i128, Error> {
    match factors.local_asset_available.signum() {
        0 => Err(Error::NothingToLiquidate),
        1 => shortfall_over_haircut(&factors.local_eth_rate, factors.net_eth_value),
        _ => factors
            .local_asset_available
            .checked_neg()
            .and_then(|debt| factors.local_asset_rate.convert_to_underlying(debt))
            .ok_or(Error::LiquidationMathError),
    }
}

/// Collateral currency benefit in underlying units and the liquidation discount
/// applied to a cross currency liquidation
pub fn cross_currency_benefit_and_discount(
    factors: &LiquidationFactors,
) -> Result<(i128, u32), Error> {
    let benefit = shortfall_over_haircut(&factors.collateral_eth_rate, factors.net_eth_value)?;
    let discount = factors
        .collateral_eth_rate
        .liquidation_discount
        .max(factors.local_eth_rate.liquidation_discount);

    Ok((benefit, discount))
}

/// Benefit gained per unit of collateral fCash sold.
///
/// (ldf - radf) + ldf * (local buffer / discount - collateral haircut)
pub fn cross_currency_benefit_divisor(
    factors: &LiquidationFactors,
    liquidation_discount: u32,
    risk_adjusted_df: FixedI128,
    liquidation_df: FixedI128,
) -> Result<FixedI128, Error> {
    let local_buffer = FixedI128::from_percentage(factors.local_eth_rate.buffer);
    let collateral_haircut = FixedI128::from_percentage(factors.collateral_eth_rate.haircut);
    let discount = FixedI128::from_percentage(liquidation_discount);

    let (local_buffer, collateral_haircut, discount) =
        match (local_buffer, collateral_haircut, discount) {
            (Some(buffer), Some(haircut), Some(discount)) => (buffer, haircut, discount),
            _ => return Err(Error::LiquidationMathError),
        };

    let term_one = liquidation_df.checked_sub(risk_adjusted_df);
    let term_two = local_buffer
        .checked_div(discount)
        .and_then(|ratio| ratio.checked_sub(collateral_haircut))
        .and_then(|spread| liquidation_df.checked_mul(spread));

    term_one
        .zip(term_two)
        .and_then(|(one, two)| one.checked_add(two))
        .ok_or(Error::LiquidationMathError)
}

fn shortfall_over_haircut(eth_rate: &ETHRate, net_eth_value: i128) -> Result<i128, Error> {
    if eth_rate.haircut == 0 {
        return Err(Error::ZeroCollateralHaircut);
    }

    let shortfall = net_eth_value
        .checked_neg()
        .and_then(|shortfall| eth_rate.convert_eth_to(shortfall))
        .ok_or(Error::LiquidationMathError)?;

    FixedI128::from_percentage(eth_rate.haircut)
        .and_then(|haircut| haircut.recip_mul_int(shortfall))
        .ok_or(Error::LiquidationMathError)
}
