//! Price provider trait and implementations.

pub mod mock;
pub mod twelve_data;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use crate::errors::MarketDataError;
use crate::models::PriceQuote;

/// Contract every price source implements.
///
/// Implementations must tolerate partial results: symbols the provider does
/// not know are simply absent from the returned map, never an error.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Stable provider identifier, e.g. "TWELVE_DATA".
    fn id(&self) -> &'static str;

    /// Fetch the latest USD price for each symbol in the set.
    async fn fetch_prices(
        &self,
        symbols: &HashSet<String>,
    ) -> Result<HashMap<String, Decimal>, MarketDataError>;

    /// Fetch the current USD/ILS exchange rate, or `None` when the provider
    /// has no usable rate.
    async fn fetch_usd_ils_rate(&self) -> Result<Option<Decimal>, MarketDataError>;

    /// Fetch a single symbol's quote, `None` when the provider does not know
    /// the symbol.
    async fn fetch_price(&self, symbol: &str) -> Result<Option<PriceQuote>, MarketDataError> {
        let symbols: HashSet<String> = std::iter::once(symbol.to_string()).collect();
        let prices = self.fetch_prices(&symbols).await?;
        Ok(prices.into_iter().next().map(|(symbol, price)| PriceQuote {
            symbol,
            price,
            currency: "USD".to_string(),
            timestamp: Utc::now(),
        }))
    }
}
