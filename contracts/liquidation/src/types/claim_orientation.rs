/// Side of an fCash position taken by a liquidation
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ClaimOrientation {
    /// Positive notional, a lender position purchased by the liquidator
    Asset,
    /// Negative notional, a debt taken over by the liquidator
    Debt,
}

impl ClaimOrientation {
    /// Returns None for zero notional
    pub fn of(notional: i128) -> Option<Self> {
        match notional.signum() {
            1 => Some(ClaimOrientation::Asset),
            -1 => Some(ClaimOrientation::Debt),
            _ => None,
        }
    }

    pub fn is_asset(self) -> bool {
        self == ClaimOrientation::Asset
    }

    /// Gives a non negative amount the sign of the orientation
    pub fn apply_sign(self, amount: i128) -> Option<i128> {
        match self {
            ClaimOrientation::Asset => Some(amount),
            ClaimOrientation::Debt => amount.checked_neg(),
        }
    }
}
