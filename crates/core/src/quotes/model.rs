//! Cached price model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::Currency;

/// Latest known price for a symbol, upserted by each refresh pass and read
/// back by the live (no-network) valuation path.
///
/// Provider prices are quoted in USD.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub symbol: String,
    pub price: Decimal,
    pub currency: Currency,
    pub updated_at: DateTime<Utc>,
}
