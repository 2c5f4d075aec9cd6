use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating or applying a ledger entry.
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Insufficient quantity: cannot sell {requested} of {symbol}, only {held} held")]
    InsufficientQuantity {
        symbol: String,
        requested: Decimal,
        held: Decimal,
    },

    #[error("Invalid transaction input: {0}")]
    InvalidInput(String),

    /// The ledger row was persisted but the derived holdings/cash update
    /// failed afterwards. The ledger is now ahead of derived state; callers
    /// must not treat this as "nothing happened".
    #[error("Transaction {transaction_id} was recorded but balances were not updated: {reason}")]
    BalancesNotUpdated {
        transaction_id: String,
        reason: String,
    },
}
