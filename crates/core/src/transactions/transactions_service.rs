use chrono::Utc;
use log::{debug, error};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::transaction_processor::{process_transaction, HoldingChange, TransactionEffect};
use super::transactions_errors::TransactionError;
use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;
use crate::holdings::{CashBalanceRepositoryTrait, Holding, HoldingRepositoryTrait};
use crate::portfolios::PortfolioRepositoryTrait;

/// Service for recording ledger entries and keeping derived state in step.
pub struct TransactionService {
    transactions: Arc<dyn TransactionRepositoryTrait>,
    portfolios: Arc<dyn PortfolioRepositoryTrait>,
    holdings: Arc<dyn HoldingRepositoryTrait>,
    cash_balances: Arc<dyn CashBalanceRepositoryTrait>,
}

impl TransactionService {
    pub fn new(
        transactions: Arc<dyn TransactionRepositoryTrait>,
        portfolios: Arc<dyn PortfolioRepositoryTrait>,
        holdings: Arc<dyn HoldingRepositoryTrait>,
        cash_balances: Arc<dyn CashBalanceRepositoryTrait>,
    ) -> Self {
        Self {
            transactions,
            portfolios,
            holdings,
            cash_balances,
        }
    }

    async fn apply_effect(
        &self,
        user_id: &str,
        portfolio_id: &str,
        existing: Option<Holding>,
        effect: TransactionEffect,
    ) -> Result<()> {
        match effect.holding {
            HoldingChange::Create {
                symbol,
                quantity,
                avg_cost,
                currency,
            } => {
                let holding = Holding {
                    id: Uuid::new_v4().to_string(),
                    user_id: user_id.to_string(),
                    portfolio_id: portfolio_id.to_string(),
                    symbol,
                    quantity,
                    avg_cost,
                    currency,
                    updated_at: Utc::now(),
                };
                self.holdings.create(holding).await?;
            }
            HoldingChange::Update {
                holding_id,
                quantity,
                avg_cost,
            } => {
                self.holdings
                    .update_position(&holding_id, quantity, avg_cost)
                    .await?;
            }
            HoldingChange::Delete { holding_id } => {
                debug!(
                    "position {} fully closed, removing holding",
                    existing.as_ref().map(|h| h.symbol.as_str()).unwrap_or("?")
                );
                self.holdings.delete(&holding_id).await?;
            }
            HoldingChange::None => {}
        }

        for delta in effect.cash {
            self.cash_balances
                .apply_delta(user_id, portfolio_id, delta.currency, delta.delta)
                .await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn record_transaction(
        &self,
        user_id: &str,
        input: NewTransaction,
    ) -> Result<Transaction> {
        input.validate()?;

        let portfolio = self.portfolios.get_by_id(&input.portfolio_id)?;
        let fee = input
            .fee
            .or(portfolio.fee_amount)
            .unwrap_or(Decimal::ZERO);
        let kind = input.kind.normalized();

        // Resolve the current position up front so validation failures
        // (notably InsufficientQuantity) abort before anything is written.
        let existing = match kind.symbol() {
            Some(symbol) => self.holdings.get_by_symbol(&input.portfolio_id, symbol)?,
            None => None,
        };
        let effect = process_transaction(existing.as_ref(), &kind, input.currency, fee)?;

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            portfolio_id: input.portfolio_id.clone(),
            kind,
            currency: input.currency,
            fee,
            created_at: Utc::now(),
        };
        let transaction = self.transactions.append(transaction).await?;

        // The ledger row is in. If the derived update fails from here on the
        // ledger is ahead of balances and the caller must hear about it.
        if let Err(err) = self
            .apply_effect(user_id, &input.portfolio_id, existing, effect)
            .await
        {
            error!(
                "transaction {} recorded but state update failed: {}",
                transaction.id, err
            );
            return Err(TransactionError::BalancesNotUpdated {
                transaction_id: transaction.id,
                reason: err.to_string(),
            }
            .into());
        }

        Ok(transaction)
    }

    fn list_transactions(&self, portfolio_id: &str) -> Result<Vec<Transaction>> {
        self.transactions.list_by_portfolio(portfolio_id)
    }
}
