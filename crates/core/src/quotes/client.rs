//! Provider client with the degradation contract.

use log::warn;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use shekelfolio_market_data::PriceProvider;

/// Thin wrapper over a price provider that enforces the never-throws
/// contract: provider failures degrade to empty results so a dead price
/// feed can never fail a refresh.
#[derive(Clone)]
pub struct PriceClient {
    provider: Arc<dyn PriceProvider>,
}

impl PriceClient {
    pub fn new(provider: Arc<dyn PriceProvider>) -> Self {
        Self { provider }
    }

    /// Latest USD prices for the symbol set. Unknown symbols are absent;
    /// a provider failure yields an empty map.
    pub async fn fetch_prices(&self, symbols: &HashSet<String>) -> HashMap<String, Decimal> {
        if symbols.is_empty() {
            return HashMap::new();
        }
        match self.provider.fetch_prices(symbols).await {
            Ok(prices) => prices,
            Err(err) => {
                warn!("price fetch from {} failed: {}", self.provider.id(), err);
                HashMap::new()
            }
        }
    }

    /// Current USD/ILS rate, or `None` when the provider has none to give.
    pub async fn fetch_usd_ils_rate(&self) -> Option<Decimal> {
        match self.provider.fetch_usd_ils_rate().await {
            Ok(rate) => rate,
            Err(err) => {
                warn!(
                    "USD/ILS rate fetch from {} failed: {}",
                    self.provider.id(),
                    err
                );
                None
            }
        }
    }
}
