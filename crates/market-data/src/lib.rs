//! Shekelfolio Market Data Crate
//!
//! Provider-agnostic price and FX rate fetching for the Shekelfolio
//! portfolio tracker.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Batch latest-price lookup for a set of equity/crypto symbols (USD)
//! - The single USD/ILS exchange rate the tracker runs on
//! - Graceful degradation: partial results are returned as-is and missing
//!   symbols are silently absent from the result map
//!
//! # Providers
//!
//! - [`TwelveDataProvider`] - live quotes from the TwelveData HTTP API
//! - [`MockPriceProvider`] - static development prices, used when no API
//!   key is configured

pub mod errors;
pub mod models;
pub mod provider;

// Re-export public types
pub use errors::MarketDataError;
pub use models::PriceQuote;
pub use provider::mock::MockPriceProvider;
pub use provider::twelve_data::TwelveDataProvider;
pub use provider::PriceProvider;
