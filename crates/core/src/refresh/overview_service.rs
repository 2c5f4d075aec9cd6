//! No-network overview paths.
//!
//! The dashboard always live-computes its figures from stored holdings and
//! cash using cached prices and the cached FX rate. The freshness label is a
//! separate concern: it reports when a snapshot was last *saved*, which can
//! lag the live figures - hence the explicit `last_snapshot_at` name.

use chrono::{DateTime, Utc};
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::constants::{DEFAULT_USD_ILS_RATE, USD_ILS_PAIR};
use crate::errors::Result;
use crate::fx::{is_reasonable_rate, Currency, FxRateStoreTrait};
use crate::holdings::{CashBalanceRepositoryTrait, HoldingRepositoryTrait};
use crate::portfolios::PortfolioRepositoryTrait;
use crate::quotes::QuoteStoreTrait;
use crate::snapshots::SnapshotRepositoryTrait;
use crate::valuation::{
    daily_change, global_summary, summarize_portfolios, DailyChange, GlobalSummary,
};

/// Dashboard payload: live totals, day-over-day change, and when a snapshot
/// was last persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub global_summary: GlobalSummary,
    pub daily_change: DailyChange,
    pub last_snapshot_at: Option<DateTime<Utc>>,
}

/// Serves valuations from stored state and cached market data only.
pub struct OverviewService {
    portfolios: Arc<dyn PortfolioRepositoryTrait>,
    holdings: Arc<dyn HoldingRepositoryTrait>,
    cash_balances: Arc<dyn CashBalanceRepositoryTrait>,
    quotes: Arc<dyn QuoteStoreTrait>,
    fx_rates: Arc<dyn FxRateStoreTrait>,
    snapshots: Arc<dyn SnapshotRepositoryTrait>,
}

impl OverviewService {
    pub fn new(
        portfolios: Arc<dyn PortfolioRepositoryTrait>,
        holdings: Arc<dyn HoldingRepositoryTrait>,
        cash_balances: Arc<dyn CashBalanceRepositoryTrait>,
        quotes: Arc<dyn QuoteStoreTrait>,
        fx_rates: Arc<dyn FxRateStoreTrait>,
        snapshots: Arc<dyn SnapshotRepositoryTrait>,
    ) -> Self {
        Self {
            portfolios,
            holdings,
            cash_balances,
            quotes,
            fx_rates,
            snapshots,
        }
    }

    /// Recomputes the global summary from stored holdings/cash and cached
    /// prices. No network.
    pub fn live_overview(
        &self,
        user_id: &str,
        display_currency: Currency,
    ) -> Result<GlobalSummary> {
        let usd_ils_rate = self.cached_rate();

        let portfolios = self.portfolios.list_by_user(user_id)?;
        if portfolios.is_empty() {
            return Ok(GlobalSummary::empty(display_currency, usd_ils_rate));
        }

        let portfolio_ids: Vec<String> = portfolios.iter().map(|p| p.id.clone()).collect();
        let holdings = self.holdings.list_by_portfolios(&portfolio_ids)?;
        let cash_balances = self.cash_balances.list_by_portfolios(&portfolio_ids)?;
        let prices = self.quotes.get_latest_prices()?;

        let summaries = summarize_portfolios(
            &portfolios,
            &holdings,
            &cash_balances,
            &prices,
            display_currency,
            usd_ils_rate,
        );
        Ok(global_summary(summaries, display_currency, usd_ils_rate))
    }

    /// Live summary plus day-over-day change against yesterday's global
    /// snapshot and the last-persisted-snapshot timestamp.
    pub fn dashboard(
        &self,
        user_id: &str,
        display_currency: Currency,
    ) -> Result<PortfolioOverview> {
        let global = self.live_overview(user_id, display_currency)?;

        let last_snapshot_at = self
            .snapshots
            .latest_global(user_id)?
            .map(|snapshot| snapshot.created_at);

        let change = match Utc::now().date_naive().pred_opt() {
            Some(yesterday) => match self.snapshots.get(user_id, None, yesterday)? {
                Some(snapshot) => daily_change(global.total_value, snapshot.total_value),
                None => DailyChange::zero(),
            },
            None => DailyChange::zero(),
        };

        Ok(PortfolioOverview {
            global_summary: global,
            daily_change: change,
            last_snapshot_at,
        })
    }

    /// Cached USD/ILS rate, defaulting when absent, unusable, or unreadable.
    fn cached_rate(&self) -> Decimal {
        match self.fx_rates.get_rate(USD_ILS_PAIR) {
            Ok(Some(row)) if is_reasonable_rate(row.rate) => row.rate,
            Ok(_) => DEFAULT_USD_ILS_RATE,
            Err(err) => {
                warn!("failed to load cached USD/ILS rate: {}", err);
                DEFAULT_USD_ILS_RATE
            }
        }
    }
}
