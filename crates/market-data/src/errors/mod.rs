//! Market data error types.

use thiserror::Error;

/// Errors that can occur while fetching prices or FX rates from a provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Provider error from {provider}: {message}")]
    ProviderError { provider: String, message: String },

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parsing error: {0}")]
    ParsingError(String),

    #[error("Rate limit exceeded for provider {provider}")]
    RateLimited { provider: String },

    #[error("No data returned")]
    NoData,
}
