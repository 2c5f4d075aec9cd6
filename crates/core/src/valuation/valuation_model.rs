//! Valuation domain models.
//!
//! Every monetary field on these summaries is already converted into the
//! display currency and rounded; they are output types, not working state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::{Currency, CurrencyAmount};

/// One priced holding line within a portfolio summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingSummary {
    pub symbol: String,
    pub quantity: Decimal,
    /// Average cost in the holding's own currency.
    pub avg_cost: Decimal,
    /// Latest price in the holding's own currency; 0 when no quote is cached.
    pub current_price: Decimal,
    pub market_value: Decimal,
    pub cost_basis: Decimal,
    pub unrealized_pl: Decimal,
    pub unrealized_pl_percent: Decimal,
    /// The display currency all monetary fields above are expressed in.
    pub currency: Currency,
}

/// Totals for a single portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub portfolio_id: String,
    pub portfolio_name: String,
    pub holdings_value: Decimal,
    pub cash_value: Decimal,
    /// holdings_value + cash_value
    pub total_value: Decimal,
    pub unrealized_pl: Decimal,
    pub unrealized_pl_percent: Decimal,
    pub cost_basis: Decimal,
    pub holdings: Vec<HoldingSummary>,
    /// Raw per-currency cash amounts, before display conversion.
    pub cash_balances: Vec<CurrencyAmount>,
}

/// Totals across all of a user's portfolios.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSummary {
    pub total_value: Decimal,
    pub total_cash: Decimal,
    pub total_holdings: Decimal,
    pub total_unrealized_pl: Decimal,
    pub total_unrealized_pl_percent: Decimal,
    pub total_cost_basis: Decimal,
    pub display_currency: Currency,
    pub usd_ils_rate: Decimal,
    pub portfolio_summaries: Vec<PortfolioSummary>,
}

impl GlobalSummary {
    /// The all-zero summary for a user with no portfolios.
    pub fn empty(display_currency: Currency, usd_ils_rate: Decimal) -> Self {
        GlobalSummary {
            total_value: Decimal::ZERO,
            total_cash: Decimal::ZERO,
            total_holdings: Decimal::ZERO,
            total_unrealized_pl: Decimal::ZERO,
            total_unrealized_pl_percent: Decimal::ZERO,
            total_cost_basis: Decimal::ZERO,
            display_currency,
            usd_ils_rate,
            portfolio_summaries: Vec::new(),
        }
    }
}

/// Day-over-day movement of a total value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyChange {
    pub amount: Decimal,
    pub percent: Decimal,
}

impl DailyChange {
    pub fn zero() -> Self {
        DailyChange {
            amount: Decimal::ZERO,
            percent: Decimal::ZERO,
        }
    }
}
