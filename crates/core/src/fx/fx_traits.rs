use async_trait::async_trait;

use super::fx_model::FxRate;
use crate::errors::Result;

/// Trait defining the contract for the cached exchange-rate store.
#[async_trait]
pub trait FxRateStoreTrait: Send + Sync {
    /// Returns the cached rate for a pair, if one has been persisted.
    fn get_rate(&self, pair: &str) -> Result<Option<FxRate>>;

    /// Inserts or replaces the rate for the row's pair.
    async fn upsert_rate(&self, rate: FxRate) -> Result<FxRate>;
}
