//! Cached price store trait.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::HashMap;

use super::model::PriceQuote;
use crate::errors::Result;

/// Trait defining the contract for the cached price store.
#[async_trait]
pub trait QuoteStoreTrait: Send + Sync {
    /// Upserts each quote by symbol, returning one result per input in the
    /// same order. A failed item never aborts the rest of the batch; the
    /// caller aggregates the per-item results into a success count.
    async fn upsert_quotes(&self, quotes: Vec<PriceQuote>) -> Vec<Result<()>>;

    /// All cached prices as a symbol -> price map.
    fn get_latest_prices(&self) -> Result<HashMap<String, Decimal>>;
}
