//! Scalar-rate conversion between the two supported currencies.
//!
//! The whole system runs on one exchange rate: `usd_ils_rate`, ILS per USD.
//! USD→ILS multiplies by the rate, ILS→USD divides by it, and aggregation
//! over mixed-currency amounts is a plain sum of per-entry conversions
//! (order-independent under exact decimal arithmetic).

use log::warn;
use rust_decimal::Decimal;

use super::currency::Currency;
use super::fx_model::CurrencyAmount;
use crate::constants::{
    DEFAULT_USD_ILS_RATE, MAX_REASONABLE_USD_ILS_RATE, MIN_REASONABLE_USD_ILS_RATE,
};

/// Converts an amount between the two supported currencies.
///
/// Identity when `from == to`. A zero rate has no defined inverse, so the
/// ILS→USD quotient degrades to zero like every other undefined quotient in
/// this crate; callers obtain rates through [`rate_or_default`], which never
/// yields zero.
pub fn convert(amount: Decimal, from: Currency, to: Currency, usd_ils_rate: Decimal) -> Decimal {
    if from == to {
        return amount;
    }
    match (from, to) {
        (Currency::Usd, Currency::Ils) => amount * usd_ils_rate,
        _ => {
            if usd_ils_rate.is_zero() {
                return Decimal::ZERO;
            }
            amount / usd_ils_rate
        }
    }
}

/// Sums mixed-currency amounts into a single target currency.
pub fn aggregate(values: &[CurrencyAmount], target: Currency, usd_ils_rate: Decimal) -> Decimal {
    values
        .iter()
        .map(|value| convert(value.amount, value.currency, target, usd_ils_rate))
        .sum()
}

/// Sanity check: a USD/ILS rate is usable only within [2.5, 5.0].
pub fn is_reasonable_rate(rate: Decimal) -> bool {
    rate >= MIN_REASONABLE_USD_ILS_RATE && rate <= MAX_REASONABLE_USD_ILS_RATE
}

/// Applies the sanity window to a fetched rate.
///
/// A missing or out-of-range rate falls back to the static default - a
/// warning, never a failure.
pub fn rate_or_default(rate: Option<Decimal>) -> Decimal {
    match rate {
        Some(rate) if is_reasonable_rate(rate) => rate,
        Some(rate) => {
            warn!(
                "USD/ILS rate {} outside sanity range, falling back to {}",
                rate, DEFAULT_USD_ILS_RATE
            );
            DEFAULT_USD_ILS_RATE
        }
        None => {
            warn!(
                "no USD/ILS rate available, falling back to {}",
                DEFAULT_USD_ILS_RATE
            );
            DEFAULT_USD_ILS_RATE
        }
    }
}
