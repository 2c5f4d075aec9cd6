//! FX module - the two supported currencies, scalar-rate conversion, and the
//! cached pair rate.

mod currency;
pub mod currency_converter;
mod fx_errors;
mod fx_model;
mod fx_traits;

pub use currency::Currency;
pub use currency_converter::{aggregate, convert, is_reasonable_rate, rate_or_default};
pub use fx_errors::FxError;
pub use fx_model::{CurrencyAmount, FxRate};
pub use fx_traits::FxRateStoreTrait;
