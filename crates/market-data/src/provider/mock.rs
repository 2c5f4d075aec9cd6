//! Static mock price provider.
//!
//! Used in development and as the fallback when no TwelveData API key is
//! configured. Serves a fixed table of USD prices and the default USD/ILS
//! rate; symbols outside the table are absent from the result, matching the
//! partial-result contract of the live provider.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};

use crate::errors::MarketDataError;
use crate::provider::PriceProvider;

const PROVIDER_ID: &str = "MOCK";

/// Development price table, in cents.
const MOCK_PRICES_CENTS: &[(&str, i64)] = &[
    ("AAPL", 17850),
    ("MSFT", 37825),
    ("GOOGL", 14180),
    ("AMZN", 15340),
    ("TSLA", 24890),
    ("NVDA", 49560),
    ("META", 35620),
    ("BRK.B", 36215),
    ("JPM", 17280),
    ("V", 26530),
    ("SPY", 47250),
    ("QQQ", 39820),
    ("VOO", 43560),
    ("VTI", 23840),
    ("BTC", 4350000),
    ("ETH", 225000),
];

/// Mock USD/ILS rate, matching the tracker's static fallback.
const MOCK_USD_ILS_RATE: Decimal = Decimal::from_parts(365, 0, 0, false, 2);

fn mock_price(symbol: &str) -> Option<Decimal> {
    let upper = symbol.to_uppercase();
    MOCK_PRICES_CENTS
        .iter()
        .find(|(s, _)| *s == upper)
        .map(|(_, cents)| Decimal::new(*cents, 2))
}

/// Price provider backed by the static development table.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockPriceProvider;

impl MockPriceProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PriceProvider for MockPriceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_prices(
        &self,
        symbols: &HashSet<String>,
    ) -> Result<HashMap<String, Decimal>, MarketDataError> {
        Ok(symbols
            .iter()
            .filter_map(|symbol| mock_price(symbol).map(|price| (symbol.clone(), price)))
            .collect())
    }

    async fn fetch_usd_ils_rate(&self) -> Result<Option<Decimal>, MarketDataError> {
        Ok(Some(MOCK_USD_ILS_RATE))
    }
}
