//! Holding and cash balance domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::Currency;

/// A security position within one portfolio.
///
/// `(portfolio_id, symbol)` is unique, and a row exists only while
/// `quantity > 0`: selling a position down to exactly zero deletes it.
/// `avg_cost` is the weighted average cost in the holding's currency; it
/// moves only on buys, never on sells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub user_id: String,
    pub portfolio_id: String,
    pub symbol: String,
    pub quantity: Decimal,
    pub avg_cost: Decimal,
    pub currency: Currency,
    pub updated_at: DateTime<Utc>,
}

/// Cash held in one currency within a portfolio.
///
/// `(portfolio_id, currency)` is unique. Rows are created lazily by the
/// first transaction touching that currency and updated in place after.
/// The amount may go negative - there is no overdraft guard here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashBalance {
    pub id: String,
    pub user_id: String,
    pub portfolio_id: String,
    pub currency: Currency,
    pub amount: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// A single BUY leg, the unit of cost-basis arithmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuyLeg {
    pub quantity: Decimal,
    pub price: Decimal,
    pub fee: Decimal,
}
