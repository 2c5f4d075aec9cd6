//! Transactions module - the append-only ledger and the state machine that
//! applies each entry to holdings and cash.

mod transaction_processor;
mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

pub use transaction_processor::{process_transaction, CashDelta, HoldingChange, TransactionEffect};
pub use transactions_errors::TransactionError;
pub use transactions_model::{NewTransaction, Transaction, TransactionKind};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};

#[cfg(test)]
mod transaction_processor_tests;
