//! Fixed-point money arithmetic helpers.
//!
//! Every monetary computation in this crate runs on `rust_decimal::Decimal`
//! (28 significant digits) - never on binary floating point. Values stay at
//! full precision through chained arithmetic and are normalized exactly once,
//! at the output boundary, by [`round_money`] / [`round_to`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::fx::Currency;

/// Rounds to `decimals` places, half-up (midpoint away from zero).
///
/// Single normalization point for every figure returned to a caller or
/// persisted.
pub fn round_to(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a money or percent figure to display precision.
pub fn round_money(value: Decimal) -> Decimal {
    round_to(value, DISPLAY_DECIMAL_PRECISION)
}

/// Percentage of `amount` relative to `base`, 0 when `base` is zero.
pub fn percent_of(amount: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() {
        return Decimal::ZERO;
    }
    amount / base * Decimal::ONE_HUNDRED
}

/// Formats a rounded amount with the currency symbol, e.g. `-$1,234.56`.
pub fn format_money(value: Decimal, currency: Currency) -> String {
    let rounded = round_money(value);
    let formatted = group_thousands(&format!("{:.2}", rounded.abs()));
    if rounded < Decimal::ZERO {
        format!("-{}{}", currency.symbol(), formatted)
    } else {
        format!("{}{}", currency.symbol(), formatted)
    }
}

/// Formats a rounded percentage with an explicit sign, e.g. `+7.14%`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = round_money(value);
    if rounded >= Decimal::ZERO {
        format!("+{:.2}%", rounded)
    } else {
        format!("{:.2}%", rounded)
    }
}

fn group_thousands(formatted: &str) -> String {
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted, None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
