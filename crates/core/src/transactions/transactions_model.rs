//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::transactions_errors::TransactionError;
use crate::fx::Currency;

/// The six kinds of ledger entry, each carrying only the fields it needs.
///
/// Serializes with the kind tag under `type` ("BUY", "SELL", ...), matching
/// the ledger's wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum TransactionKind {
    Buy {
        symbol: String,
        quantity: Decimal,
        price: Decimal,
    },
    Sell {
        symbol: String,
        quantity: Decimal,
        price: Decimal,
    },
    Deposit {
        amount: Decimal,
    },
    Withdraw {
        amount: Decimal,
    },
    Convert {
        amount: Decimal,
        from_currency: Currency,
        to_currency: Currency,
        fx_rate: Decimal,
    },
    Dividend {
        amount: Decimal,
    },
}

impl TransactionKind {
    /// The ledger's canonical type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            TransactionKind::Buy { .. } => "BUY",
            TransactionKind::Sell { .. } => "SELL",
            TransactionKind::Deposit { .. } => "DEPOSIT",
            TransactionKind::Withdraw { .. } => "WITHDRAW",
            TransactionKind::Convert { .. } => "CONVERT",
            TransactionKind::Dividend { .. } => "DIVIDEND",
        }
    }

    /// The traded symbol for BUY/SELL, `None` for cash-only kinds.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            TransactionKind::Buy { symbol, .. } | TransactionKind::Sell { symbol, .. } => {
                Some(symbol)
            }
            _ => None,
        }
    }

    /// Uppercases the symbol on trade kinds; identity elsewhere.
    pub fn normalized(self) -> Self {
        match self {
            TransactionKind::Buy {
                symbol,
                quantity,
                price,
            } => TransactionKind::Buy {
                symbol: symbol.trim().to_uppercase(),
                quantity,
                price,
            },
            TransactionKind::Sell {
                symbol,
                quantity,
                price,
            } => TransactionKind::Sell {
                symbol: symbol.trim().to_uppercase(),
                quantity,
                price,
            },
            other => other,
        }
    }

    pub fn validate(&self) -> Result<(), TransactionError> {
        match self {
            TransactionKind::Buy {
                symbol,
                quantity,
                price,
            }
            | TransactionKind::Sell {
                symbol,
                quantity,
                price,
            } => {
                if symbol.trim().is_empty() {
                    return Err(TransactionError::InvalidInput(
                        "symbol cannot be empty".to_string(),
                    ));
                }
                if *quantity <= Decimal::ZERO {
                    return Err(TransactionError::InvalidInput(
                        "quantity must be positive".to_string(),
                    ));
                }
                if *price < Decimal::ZERO {
                    return Err(TransactionError::InvalidInput(
                        "price cannot be negative".to_string(),
                    ));
                }
            }
            TransactionKind::Deposit { amount }
            | TransactionKind::Withdraw { amount }
            | TransactionKind::Dividend { amount } => {
                if *amount <= Decimal::ZERO {
                    return Err(TransactionError::InvalidInput(
                        "amount must be positive".to_string(),
                    ));
                }
            }
            TransactionKind::Convert {
                amount,
                from_currency,
                to_currency,
                fx_rate,
            } => {
                if *amount <= Decimal::ZERO {
                    return Err(TransactionError::InvalidInput(
                        "amount must be positive".to_string(),
                    ));
                }
                if from_currency == to_currency {
                    return Err(TransactionError::InvalidInput(
                        "conversion requires two different currencies".to_string(),
                    ));
                }
                if *fx_rate <= Decimal::ZERO {
                    return Err(TransactionError::InvalidInput(
                        "fxRate must be positive".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// An immutable ledger entry. Never mutated or deleted once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub portfolio_id: String,
    #[serde(flatten)]
    pub kind: TransactionKind,
    pub currency: Currency,
    pub fee: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input model for recording a new ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub portfolio_id: String,
    #[serde(flatten)]
    pub kind: TransactionKind,
    pub currency: Currency,
    /// `None` defers to the portfolio's configured default fee, else 0.
    pub fee: Option<Decimal>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), TransactionError> {
        self.kind.validate()?;
        if let Some(fee) = self.fee {
            if fee < Decimal::ZERO {
                return Err(TransactionError::InvalidInput(
                    "fee cannot be negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}
