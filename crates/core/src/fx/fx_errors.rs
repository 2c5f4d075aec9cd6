use thiserror::Error;

/// FX-specific error types.
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Rate not found: {0}")]
    RateNotFound(String),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(String),
}
