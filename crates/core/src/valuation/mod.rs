//! Valuation module - rolls per-holding figures up into per-portfolio and
//! global summaries in a single display currency.

pub mod aggregation;
mod valuation_model;

pub use aggregation::{
    daily_change, global_summary, holding_summary, portfolio_summary, summarize_portfolios,
};
pub use valuation_model::{DailyChange, GlobalSummary, HoldingSummary, PortfolioSummary};
