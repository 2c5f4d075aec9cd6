//! The refresh orchestrator.
//!
//! One pass: load state, fetch market data, recompute summaries, persist
//! snapshots. Only the initial state load is fatal - a dead price feed, a
//! missing FX rate or a failed snapshot write degrade to counts in the
//! outcome, never to an error.

use chrono::Utc;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::constants::DEFAULT_USD_ILS_RATE;
use crate::errors::Result;
use crate::fx::{rate_or_default, Currency, FxRate, FxRateStoreTrait};
use crate::holdings::{CashBalanceRepositoryTrait, HoldingRepositoryTrait};
use crate::portfolios::PortfolioRepositoryTrait;
use crate::quotes::{PriceClient, PriceQuote, QuoteStoreTrait};
use crate::snapshots::{Snapshot, SnapshotRepositoryTrait};
use crate::valuation::{global_summary, summarize_portfolios, GlobalSummary, PortfolioSummary};

/// What one refresh pass accomplished.
///
/// The counts report partial success: a refresh that priced nothing and
/// saved no snapshots can still return `Ok`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshOutcome {
    pub global_summary: GlobalSummary,
    pub usd_ils_rate: Decimal,
    pub prices_updated: usize,
    pub snapshots_saved: usize,
}

/// Coordinates price fetch, rate fetch, aggregation and snapshot upserts.
pub struct RefreshService {
    portfolios: Arc<dyn PortfolioRepositoryTrait>,
    holdings: Arc<dyn HoldingRepositoryTrait>,
    cash_balances: Arc<dyn CashBalanceRepositoryTrait>,
    quotes: Arc<dyn QuoteStoreTrait>,
    fx_rates: Arc<dyn FxRateStoreTrait>,
    snapshots: Arc<dyn SnapshotRepositoryTrait>,
    price_client: PriceClient,
}

impl RefreshService {
    pub fn new(
        portfolios: Arc<dyn PortfolioRepositoryTrait>,
        holdings: Arc<dyn HoldingRepositoryTrait>,
        cash_balances: Arc<dyn CashBalanceRepositoryTrait>,
        quotes: Arc<dyn QuoteStoreTrait>,
        fx_rates: Arc<dyn FxRateStoreTrait>,
        snapshots: Arc<dyn SnapshotRepositoryTrait>,
        price_client: PriceClient,
    ) -> Self {
        Self {
            portfolios,
            holdings,
            cash_balances,
            quotes,
            fx_rates,
            snapshots,
            price_client,
        }
    }

    /// Runs one full refresh pass for a user.
    pub async fn refresh(
        &self,
        user_id: &str,
        display_currency: Currency,
    ) -> Result<RefreshOutcome> {
        // 1-2. Base state. Failing to load it is the one fatal case.
        let portfolios = self.portfolios.list_by_user(user_id)?;
        if portfolios.is_empty() {
            return Ok(RefreshOutcome {
                global_summary: GlobalSummary::empty(display_currency, DEFAULT_USD_ILS_RATE),
                usd_ils_rate: DEFAULT_USD_ILS_RATE,
                prices_updated: 0,
                snapshots_saved: 0,
            });
        }

        let portfolio_ids: Vec<String> = portfolios.iter().map(|p| p.id.clone()).collect();
        let holdings = self.holdings.list_by_portfolios(&portfolio_ids)?;
        let cash_balances = self.cash_balances.list_by_portfolios(&portfolio_ids)?;

        // 3-4. Distinct symbols, then current prices (partial results fine).
        let symbols: HashSet<String> = holdings.iter().map(|h| h.symbol.clone()).collect();
        let prices = self.price_client.fetch_prices(&symbols).await;
        debug!(
            "fetched {} of {} requested prices for user {}",
            prices.len(),
            symbols.len(),
            user_id
        );

        // 5. Persist fetched prices, counting per-item successes.
        let now = Utc::now();
        let quote_rows: Vec<PriceQuote> = prices
            .iter()
            .map(|(symbol, price)| PriceQuote {
                symbol: symbol.clone(),
                price: *price,
                currency: Currency::Usd,
                updated_at: now,
            })
            .collect();
        let upsert_results = self.quotes.upsert_quotes(quote_rows).await;
        let prices_updated = upsert_results.iter().filter(|r| r.is_ok()).count();
        for err in upsert_results.iter().filter_map(|r| r.as_ref().err()) {
            warn!("price upsert failed: {}", err);
        }

        // 6. FX rate with sanity fallback; persistence is best-effort.
        let usd_ils_rate = rate_or_default(self.price_client.fetch_usd_ils_rate().await);
        if let Err(err) = self.fx_rates.upsert_rate(FxRate::usd_ils(usd_ils_rate)).await {
            warn!("failed to persist USD/ILS rate: {}", err);
        }

        // 7. Aggregate.
        let summaries = summarize_portfolios(
            &portfolios,
            &holdings,
            &cash_balances,
            &prices,
            display_currency,
            usd_ils_rate,
        );
        let global = global_summary(summaries, display_currency, usd_ils_rate);

        // 8. One snapshot per portfolio plus the global row, upserted on
        // (portfolio-or-null, date) so a same-day rerun overwrites.
        let today = Utc::now().date_naive();
        let mut snapshots_saved = 0;

        for summary in &global.portfolio_summaries {
            let snapshot = self.portfolio_snapshot(user_id, summary, &global, today);
            match self.snapshots.upsert(snapshot).await {
                Ok(_) => snapshots_saved += 1,
                Err(err) => warn!(
                    "snapshot upsert failed for portfolio {}: {}",
                    summary.portfolio_id, err
                ),
            }
        }

        let global_snapshot = Snapshot {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            portfolio_id: None,
            date: today,
            total_value: global.total_value,
            cash_value: global.total_cash,
            holdings_value: global.total_holdings,
            currency: display_currency,
            usd_ils_rate,
            created_at: Utc::now(),
        };
        match self.snapshots.upsert(global_snapshot).await {
            Ok(_) => snapshots_saved += 1,
            Err(err) => warn!("global snapshot upsert failed: {}", err),
        }

        Ok(RefreshOutcome {
            global_summary: global,
            usd_ils_rate,
            prices_updated,
            snapshots_saved,
        })
    }

    fn portfolio_snapshot(
        &self,
        user_id: &str,
        summary: &PortfolioSummary,
        global: &GlobalSummary,
        date: chrono::NaiveDate,
    ) -> Snapshot {
        Snapshot {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            portfolio_id: Some(summary.portfolio_id.clone()),
            date,
            total_value: summary.total_value,
            cash_value: summary.cash_value,
            holdings_value: summary.holdings_value,
            currency: global.display_currency,
            usd_ils_rate: global.usd_ils_rate,
            created_at: Utc::now(),
        }
    }
}
