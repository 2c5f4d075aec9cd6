//! Snapshot domain model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::Currency;

/// One persisted valuation row: per portfolio per day, plus one global row
/// per day with `portfolio_id = None`.
///
/// Rows are upserted on `(user, portfolio-or-null, date)` - re-running a
/// refresh on the same day overwrites rather than accumulates. Used to
/// answer day-over-day change without replaying the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub user_id: String,
    /// `None` marks the global (all-portfolios) row.
    pub portfolio_id: Option<String>,
    pub date: NaiveDate,
    pub total_value: Decimal,
    pub cash_value: Decimal,
    pub holdings_value: Decimal,
    pub currency: Currency,
    pub usd_ils_rate: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn is_global(&self) -> bool {
        self.portfolio_id.is_none()
    }
}
