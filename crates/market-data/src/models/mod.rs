//! Market data domain models.

mod quote;

pub use quote::PriceQuote;
