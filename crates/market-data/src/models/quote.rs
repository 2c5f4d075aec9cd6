//! Quote models returned by providers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A current price for a single symbol, as returned by a provider.
///
/// Prices are quoted in USD; the tracker's FX layer handles conversion
/// into the display currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub symbol: String,
    pub price: Decimal,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
}
