use liquidation_interface::types::account_context::AccountContext;
use liquidation_interface::types::error::Error;
use liquidation_interface::types::portfolio_asset::PortfolioAsset;
use soroban_sdk::{vec, Address, Env, Map, Vec};

use crate::storage::*;

use super::rate_oracle::RateOracle;

/// In memory view of an account: context, fCash holdings and cash balances.
/// fCash of the bitmap currency lives in `bitmap`, everything else in `assets`.
pub struct AccountState {
    pub account: Address,
    pub context: AccountContext,
    pub assets: Vec<PortfolioAsset>,
    pub bitmap: Map<u64, i128>,
    pub cash_balances: Map<u32, i128>,
}

impl AccountState {
    pub fn load(env: &Env, account: &Address) -> Self {
        let context = read_account_context(env, account);
        let bitmap = if context.is_bitmap_enabled() {
            read_bitmap(env, account, context.bitmap_currency)
        } else {
            Map::new(env)
        };

        let mut state = Self {
            account: account.clone(),
            context,
            assets: read_portfolio(env, account),
            bitmap,
            cash_balances: read_cash_balances(env, account),
        };
        state.refresh_context();

        state
    }

    pub fn write(&self, env: &Env) {
        write_account_context(env, &self.account, &self.context);
        write_portfolio(env, &self.account, &self.assets);
        write_cash_balances(env, &self.account, &self.cash_balances);

        if self.context.is_bitmap_enabled() {
            write_bitmap(
                env,
                &self.account,
                self.context.bitmap_currency,
                &self.bitmap,
            );
        }
    }

    pub fn cash_balance(&self, currency: u32) -> i128 {
        self.cash_balances.get(currency).unwrap_or(0)
    }

    pub fn set_cash_balance(&mut self, currency: u32, balance: i128) {
        if balance == 0 {
            self.cash_balances.remove(currency);
        } else {
            self.cash_balances.set(currency, balance);
        }

        self.refresh_context();
    }

    /// Notional held at `maturity`, zero when there is no position
    pub fn fcash_notional(&self, currency: u32, maturity: u64) -> i128 {
        if self.is_bitmap_currency(currency) {
            return self.bitmap.get(maturity).unwrap_or(0);
        }

        self.find_asset(currency, maturity)
            .and_then(|index| self.assets.get(index))
            .map(|asset| asset.notional)
            .unwrap_or(0)
    }

    /// Merges `assets` into the portfolio, netting positions at the same maturity
    pub fn add_assets(&mut self, assets: &Vec<PortfolioAsset>) -> Result<(), Error> {
        for asset in assets.iter() {
            if asset.notional == 0 {
                continue;
            }

            if self.is_bitmap_currency(asset.currency) {
                let notional = self
                    .bitmap
                    .get(asset.maturity)
                    .unwrap_or(0)
                    .checked_add(asset.notional)
                    .ok_or(Error::MathOverflowError)?;

                if notional == 0 {
                    self.bitmap.remove(asset.maturity);
                } else {
                    self.bitmap.set(asset.maturity, notional);
                }

                continue;
            }

            match self.find_asset(asset.currency, asset.maturity) {
                Some(index) => {
                    let mut existing = self.assets.get(index).ok_or(Error::MathOverflowError)?;
                    existing.notional = existing
                        .notional
                        .checked_add(asset.notional)
                        .ok_or(Error::MathOverflowError)?;

                    if existing.notional == 0 {
                        self.assets.remove(index);
                    } else {
                        self.assets.set(index, existing);
                    }
                }
                None => self.assets.push_back(asset),
            }
        }

        self.refresh_context();

        Ok(())
    }

    /// Converts every position matured at `block_time` into cash.
    /// Returns the number of settled positions.
    pub fn settle(
        &mut self,
        env: &Env,
        oracle: &impl RateOracle,
        block_time: u64,
    ) -> Result<u32, Error> {
        if !self.context.must_settle(block_time) {
            return Ok(0);
        }

        let mut settled = 0;
        let mut remaining = vec![env];

        for asset in self.assets.clone().iter() {
            if asset.maturity > block_time {
                remaining.push_back(asset);
                continue;
            }

            self.settle_notional(oracle, asset.currency, asset.maturity, asset.notional)?;
            settled += 1;
        }

        self.assets = remaining;

        if self.context.is_bitmap_enabled() {
            let currency = self.context.bitmap_currency;
            let mut remaining = Map::new(env);

            for (maturity, notional) in self.bitmap.clone().iter() {
                if maturity > block_time {
                    remaining.set(maturity, notional);
                    continue;
                }

                self.settle_notional(oracle, currency, maturity, notional)?;
                settled += 1;
            }

            self.bitmap = remaining;
        }

        self.refresh_context();

        Ok(settled)
    }

    fn settle_notional(
        &mut self,
        oracle: &impl RateOracle,
        currency: u32,
        maturity: u64,
        notional: i128,
    ) -> Result<(), Error> {
        let settlement_rate = oracle.settlement_rate(currency, maturity)?;
        let cash = settlement_rate
            .convert_from_underlying(notional)
            .ok_or(Error::MathOverflowError)?;

        let balance = self
            .cash_balance(currency)
            .checked_add(cash)
            .ok_or(Error::MathOverflowError)?;

        if balance == 0 {
            self.cash_balances.remove(currency);
        } else {
            self.cash_balances.set(currency, balance);
        }

        Ok(())
    }

    fn is_bitmap_currency(&self, currency: u32) -> bool {
        self.context.is_bitmap_enabled() && self.context.bitmap_currency == currency
    }

    fn find_asset(&self, currency: u32, maturity: u64) -> Option<u32> {
        self.assets
            .iter()
            .position(|asset| asset.is_fcash_at(currency, maturity))
            .map(|index| index as u32)
    }

    fn refresh_context(&mut self) {
        let mut next_settle_time = 0;
        let mut has_asset_debt = false;

        let positions = self
            .assets
            .iter()
            .map(|asset| (asset.maturity, asset.notional))
            .chain(self.bitmap.iter());

        for (maturity, notional) in positions {
            if next_settle_time == 0 || maturity < next_settle_time {
                next_settle_time = maturity;
            }

            has_asset_debt |= notional.is_negative();
        }

        let has_cash_debt = self
            .cash_balances
            .values()
            .iter()
            .any(|balance| balance.is_negative());

        self.context.next_settle_time = next_settle_time;
        self.context.set_asset_debt(has_asset_debt);
        self.context.set_cash_debt(has_cash_debt);
    }
}
