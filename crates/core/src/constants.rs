use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal places applied to money and percent figures at the output boundary
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Fallback USD/ILS rate used when no usable rate can be fetched
pub const DEFAULT_USD_ILS_RATE: Decimal = dec!(3.65);

/// Sanity window for a fetched USD/ILS rate; anything outside is discarded
pub const MIN_REASONABLE_USD_ILS_RATE: Decimal = dec!(2.5);
pub const MAX_REASONABLE_USD_ILS_RATE: Decimal = dec!(5.0);

/// Cache key for the single currency pair the tracker supports
pub const USD_ILS_PAIR: &str = "USDILS";
