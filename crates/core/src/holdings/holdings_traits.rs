//! Holding and cash balance repository traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::holdings_model::{CashBalance, Holding};
use crate::errors::Result;
use crate::fx::Currency;

/// Trait defining the contract for Holding repository operations.
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Looks up the unique `(portfolio, symbol)` row, if it exists.
    fn get_by_symbol(&self, portfolio_id: &str, symbol: &str) -> Result<Option<Holding>>;

    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>>;

    fn list_by_portfolios(&self, portfolio_ids: &[String]) -> Result<Vec<Holding>>;

    async fn create(&self, holding: Holding) -> Result<Holding>;

    /// Re-sizes/re-prices an existing position.
    async fn update_position(
        &self,
        holding_id: &str,
        quantity: Decimal,
        avg_cost: Decimal,
    ) -> Result<()>;

    /// Removes a fully-closed position.
    async fn delete(&self, holding_id: &str) -> Result<()>;
}

/// Trait defining the contract for CashBalance repository operations.
#[async_trait]
pub trait CashBalanceRepositoryTrait: Send + Sync {
    /// Looks up the unique `(portfolio, currency)` row, if it exists.
    fn get_balance(&self, portfolio_id: &str, currency: Currency) -> Result<Option<CashBalance>>;

    fn list_by_portfolios(&self, portfolio_ids: &[String]) -> Result<Vec<CashBalance>>;

    /// Adds `delta` to the balance, creating the row at `delta` when no
    /// balance exists yet for that currency.
    async fn apply_delta(
        &self,
        user_id: &str,
        portfolio_id: &str,
        currency: Currency,
        delta: Decimal,
    ) -> Result<CashBalance>;
}
