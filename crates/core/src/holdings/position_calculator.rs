//! Pure cost-basis and valuation arithmetic for a single position.
//!
//! All functions run at full decimal precision; callers round at the output
//! boundary. Undefined quotients (zero quantity, zero average cost) degrade
//! to zero rather than erroring.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::holdings_model::BuyLeg;

/// Unrealized profit/loss on a still-held position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnrealizedPl {
    pub amount: Decimal,
    pub percent: Decimal,
}

/// Weighted average cost over a position's BUY legs.
///
/// WAC = (Σ quantity·price + Σ fee) / Σ quantity. Sells never contribute -
/// they reduce quantity without moving the average.
pub fn weighted_average_cost(buys: &[BuyLeg]) -> Decimal {
    let mut total_cost = Decimal::ZERO;
    let mut total_quantity = Decimal::ZERO;

    for buy in buys {
        total_cost += buy.quantity * buy.price + buy.fee;
        total_quantity += buy.quantity;
    }

    if total_quantity.is_zero() {
        return Decimal::ZERO;
    }
    total_cost / total_quantity
}

/// Incremental WAC update after one more buy.
///
/// New WAC = (old_wac·old_qty + price·qty + fee) / (old_qty + qty).
/// Algebraically the same formula as [`weighted_average_cost`] over the full
/// buy history, so the two agree to rounding precision.
pub fn update_wac_after_buy(
    old_wac: Decimal,
    old_quantity: Decimal,
    price: Decimal,
    quantity: Decimal,
    fee: Decimal,
) -> Decimal {
    let total_quantity = old_quantity + quantity;
    if total_quantity.is_zero() {
        return Decimal::ZERO;
    }
    (old_wac * old_quantity + price * quantity + fee) / total_quantity
}

/// Paper profit/loss against the average cost.
///
/// Percent is 0 when `avg_cost` is 0.
pub fn unrealized_pl(current_price: Decimal, avg_cost: Decimal, quantity: Decimal) -> UnrealizedPl {
    let amount = (current_price - avg_cost) * quantity;
    let percent = if avg_cost.is_zero() {
        Decimal::ZERO
    } else {
        (current_price - avg_cost) / avg_cost * Decimal::ONE_HUNDRED
    };
    UnrealizedPl { amount, percent }
}

/// Current market value of a position.
pub fn market_value(current_price: Decimal, quantity: Decimal) -> Decimal {
    current_price * quantity
}

/// Total amount paid for a position including fees.
pub fn cost_basis(buys: &[BuyLeg]) -> Decimal {
    buys.iter()
        .map(|buy| buy.quantity * buy.price + buy.fee)
        .sum()
}
