use common::FixedI128;
use free_collateral_interface::types::asset_rate::AssetRate;
use liquidation_interface::types::error::Error;
use market_oracle_interface::MarketOracleClient;
use soroban_sdk::Env;

use crate::storage::read_market_oracle;

pub trait RateOracle {
    /// Annualized oracle rate of `currency` for `maturity`
    fn oracle_rate(&self, currency: u32, maturity: u64, block_time: u64)
        -> Result<FixedI128, Error>;

    /// Asset rate used to settle fCash of `currency` matured at `maturity`
    fn settlement_rate(&self, currency: u32, maturity: u64) -> Result<AssetRate, Error>;
}

pub struct MarketOracle<'a> {
    client: MarketOracleClient<'a>,
}

impl<'a> MarketOracle<'a> {
    pub fn new(env: &'a Env) -> Result<Self, Error> {
        let address = read_market_oracle(env)?;

        Ok(Self {
            client: MarketOracleClient::new(env, &address),
        })
    }
}

impl RateOracle for MarketOracle<'_> {
    fn oracle_rate(
        &self,
        currency: u32,
        maturity: u64,
        block_time: u64,
    ) -> Result<FixedI128, Error> {
        self.client
            .oracle_rate(&currency, &maturity, &block_time)
            .filter(|rate| !rate.is_negative())
            .map(FixedI128::from_inner)
            .ok_or(Error::NoOracleRate)
    }

    fn settlement_rate(&self, currency: u32, maturity: u64) -> Result<AssetRate, Error> {
        self.client
            .settlement_rate(&currency, &maturity)
            .filter(|rate| rate.is_positive())
            .map(AssetRate::new)
            .ok_or(Error::NoSettlementRate)
    }
}
