//! TwelveData provider implementation.
//!
//! Fetches latest prices and the USD/ILS rate from the TwelveData API.
//!
//! # API Endpoints
//!
//! - Latest price (batch): `https://api.twelvedata.com/price?symbol=AAPL,MSFT`
//! - Exchange rate: `https://api.twelvedata.com/exchange_rate?symbol=USD/ILS`
//!
//! # Response Format
//!
//! The price endpoint changes shape with the number of symbols requested: a
//! single symbol returns `{"price": "178.50"}` while multiple symbols return
//! an object keyed by symbol, `{"AAPL": {"price": "178.50"}, ...}`. Errors
//! are reported in-band via `{"status": "error", "message": "..."}`.

use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::provider::PriceProvider;

const BASE_URL: &str = "https://api.twelvedata.com";
const PROVIDER_ID: &str = "TWELVE_DATA";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// TwelveData provider for fetching latest prices and the USD/ILS rate.
///
/// # Example
///
/// ```ignore
/// let provider = TwelveDataProvider::new("your-api-key".to_string());
/// let prices = provider.fetch_prices(&symbols).await?;
/// ```
pub struct TwelveDataProvider {
    client: Client,
    api_key: String,
}

impl TwelveDataProvider {
    /// Create a new TwelveData provider with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Fetch a URL and parse the response body as JSON.
    async fn fetch_json(&self, url: &str) -> Result<Value, MarketDataError> {
        let response = self.client.get(url).send().await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !response.status().is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body: Value = response.json().await?;

        if body.get("status").and_then(Value::as_str) == Some("error") {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown API error")
                .to_string();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message,
            });
        }

        Ok(body)
    }
}

/// Extract `{"price": "..."}` from a response fragment.
fn price_field(fragment: &Value) -> Option<Decimal> {
    let raw = fragment.get("price")?;
    match raw {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

/// Parse a `/price` response into a symbol -> price map.
///
/// Handles both response shapes: a bare price object for a single requested
/// symbol and a symbol-keyed object for batch requests. Symbols missing from
/// the response are skipped.
fn parse_price_response(symbols: &HashSet<String>, body: &Value) -> HashMap<String, Decimal> {
    let mut prices = HashMap::new();

    if symbols.len() == 1 {
        if let (Some(symbol), Some(price)) = (symbols.iter().next(), price_field(body)) {
            prices.insert(symbol.clone(), price);
        }
        return prices;
    }

    for symbol in symbols {
        match body.get(symbol).and_then(price_field) {
            Some(price) => {
                prices.insert(symbol.clone(), price);
            }
            None => {
                warn!("no price in TwelveData response for {}", symbol);
            }
        }
    }

    prices
}

/// Parse an `/exchange_rate` response.
fn parse_rate_response(body: &Value) -> Option<Decimal> {
    let raw = body.get("rate")?;
    match raw {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

#[async_trait]
impl PriceProvider for TwelveDataProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_prices(
        &self,
        symbols: &HashSet<String>,
    ) -> Result<HashMap<String, Decimal>, MarketDataError> {
        if symbols.is_empty() {
            return Ok(HashMap::new());
        }

        let symbol_param = symbols.iter().cloned().collect::<Vec<_>>().join(",");
        let url = format!(
            "{}/price?symbol={}&apikey={}",
            BASE_URL, symbol_param, self.api_key
        );

        let body = self.fetch_json(&url).await?;
        Ok(parse_price_response(symbols, &body))
    }

    async fn fetch_usd_ils_rate(&self) -> Result<Option<Decimal>, MarketDataError> {
        let url = format!("{}/exchange_rate?symbol=USD/ILS&apikey={}", BASE_URL, self.api_key);

        let body = self.fetch_json(&url).await?;
        Ok(parse_rate_response(&body))
    }
}
