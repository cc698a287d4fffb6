use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,

    SelfLiquidation = 100,
    SameCurrency = 101,
    InvalidCurrency = 102,
    InputLengthMismatch = 103,
    DuplicateMaturity = 104,
    InvalidMaxAmount = 105,
    MaturedClaim = 106,
    SufficientCollateral = 107,
    NothingToLiquidate = 108,
    NoLocalDebt = 109,
    NoCollateralAvailable = 110,
    NegativeCollateralClaim = 111,
    BitmapCurrencyAlreadySet = 112,
    BitmapHasListAssets = 113,

    InsufficientCashBalance = 200,
    InsufficientLiquidatorBalance = 201,
    LiquidatorHasDebt = 202,
    InsufficientFreeCollateral = 203,

    ZeroCollateralHaircut = 300,
    InvalidLiquidationConfig = 301,
    NoLiquidationFactors = 302,
    NoOracleRate = 303,
    NoSettlementRate = 304,

    MathOverflowError = 400,
    LiquidationMathError = 401,
    DiscountFactorMathError = 402,
}
