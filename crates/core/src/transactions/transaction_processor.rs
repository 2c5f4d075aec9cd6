//! Pure application of a single ledger entry to holdings/cash state.
//!
//! `process_transaction` is a function of (current holding or none, the
//! entry's kind, its currency, its resolved fee) to the state changes the
//! entry implies. It touches no storage and no shared state; the service
//! layer is responsible for persisting the returned effect.

use rust_decimal::Decimal;

use super::transactions_errors::TransactionError;
use super::transactions_model::TransactionKind;
use crate::fx::Currency;
use crate::holdings::position_calculator::update_wac_after_buy;
use crate::holdings::Holding;

/// The holding-side change an entry implies.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldingChange {
    /// Open a new position.
    Create {
        symbol: String,
        quantity: Decimal,
        avg_cost: Decimal,
        currency: Currency,
    },
    /// Re-size/re-price an existing position.
    Update {
        holding_id: String,
        quantity: Decimal,
        avg_cost: Decimal,
    },
    /// Position fully closed; the row goes away.
    Delete { holding_id: String },
    /// Cash-only entries leave holdings alone.
    None,
}

/// A signed adjustment to one currency's cash balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashDelta {
    pub currency: Currency,
    pub delta: Decimal,
}

/// Everything a single ledger entry does to derived state.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionEffect {
    pub holding: HoldingChange,
    pub cash: Vec<CashDelta>,
}

/// Applies one ledger entry to the current position state.
///
/// Fails only on the SELL precondition (`InsufficientQuantity`); every other
/// kind is unconditional. On failure nothing is mutated anywhere - the
/// effect is never partially built.
pub fn process_transaction(
    existing: Option<&Holding>,
    kind: &TransactionKind,
    currency: Currency,
    fee: Decimal,
) -> Result<TransactionEffect, TransactionError> {
    match kind {
        TransactionKind::Buy {
            symbol,
            quantity,
            price,
        } => {
            let holding = match existing {
                Some(holding) => HoldingChange::Update {
                    holding_id: holding.id.clone(),
                    quantity: holding.quantity + quantity,
                    avg_cost: update_wac_after_buy(
                        holding.avg_cost,
                        holding.quantity,
                        *price,
                        *quantity,
                        fee,
                    ),
                },
                None => HoldingChange::Create {
                    symbol: symbol.clone(),
                    quantity: *quantity,
                    // First buy: per-unit cost absorbs the fee directly.
                    avg_cost: if quantity.is_zero() {
                        Decimal::ZERO
                    } else {
                        *price + fee / quantity
                    },
                    currency,
                },
            };

            Ok(TransactionEffect {
                holding,
                cash: vec![CashDelta {
                    currency,
                    delta: -(*price * quantity + fee),
                }],
            })
        }

        TransactionKind::Sell {
            symbol,
            quantity,
            price,
        } => {
            let held = existing.map(|h| h.quantity).unwrap_or(Decimal::ZERO);
            let holding = existing.filter(|h| h.quantity >= *quantity).ok_or_else(|| {
                TransactionError::InsufficientQuantity {
                    symbol: symbol.clone(),
                    requested: *quantity,
                    held,
                }
            })?;

            let remaining = holding.quantity - quantity;
            let change = if remaining.is_zero() {
                HoldingChange::Delete {
                    holding_id: holding.id.clone(),
                }
            } else {
                // Average cost is untouched by sells.
                HoldingChange::Update {
                    holding_id: holding.id.clone(),
                    quantity: remaining,
                    avg_cost: holding.avg_cost,
                }
            };

            Ok(TransactionEffect {
                holding: change,
                cash: vec![CashDelta {
                    currency,
                    delta: *price * quantity - fee,
                }],
            })
        }

        TransactionKind::Deposit { amount } | TransactionKind::Dividend { amount } => {
            Ok(TransactionEffect {
                holding: HoldingChange::None,
                cash: vec![CashDelta {
                    currency,
                    delta: *amount,
                }],
            })
        }

        TransactionKind::Withdraw { amount } => Ok(TransactionEffect {
            holding: HoldingChange::None,
            cash: vec![CashDelta {
                currency,
                delta: -*amount,
            }],
        }),

        TransactionKind::Convert {
            amount,
            from_currency,
            to_currency,
            fx_rate,
        } => Ok(TransactionEffect {
            holding: HoldingChange::None,
            cash: vec![
                CashDelta {
                    currency: *from_currency,
                    delta: -*amount,
                },
                CashDelta {
                    currency: *to_currency,
                    delta: *amount * fx_rate,
                },
            ],
        }),
    }
}
