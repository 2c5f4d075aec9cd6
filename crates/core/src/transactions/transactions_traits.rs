//! Transaction repository and service traits.

use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction};
use crate::errors::Result;

/// Trait defining the contract for the append-only ledger store.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Appends one entry. The ledger is immutable: there is no update or
    /// delete on this trait by design of the data model.
    async fn append(&self, transaction: Transaction) -> Result<Transaction>;

    /// Lists a portfolio's ledger, newest first.
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Transaction>>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Validates, appends to the ledger, and applies the derived
    /// holdings/cash changes.
    async fn record_transaction(&self, user_id: &str, input: NewTransaction)
        -> Result<Transaction>;

    fn list_transactions(&self, portfolio_id: &str) -> Result<Vec<Transaction>>;
}
