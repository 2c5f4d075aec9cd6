//! FX domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use crate::constants::USD_ILS_PAIR;

/// Cached exchange rate for a currency pair, upserted by each refresh pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FxRate {
    pub pair: String,
    pub rate: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl FxRate {
    /// Builds the USD/ILS cache row with the current timestamp.
    pub fn usd_ils(rate: Decimal) -> Self {
        FxRate {
            pair: USD_ILS_PAIR.to_string(),
            rate,
            updated_at: Utc::now(),
        }
    }
}

/// An amount tagged with the currency it is denominated in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAmount {
    pub amount: Decimal,
    pub currency: Currency,
}
