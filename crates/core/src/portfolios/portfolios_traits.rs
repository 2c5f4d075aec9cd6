//! Portfolio repository and service traits.
//!
//! These traits define the contract for portfolio operations without any
//! storage-specific types, allowing for different backends.

use async_trait::async_trait;

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use crate::errors::Result;

/// Trait defining the contract for Portfolio repository operations.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Persists a fully-populated portfolio row.
    async fn create(&self, portfolio: Portfolio) -> Result<Portfolio>;

    /// Updates name, default fee and account number.
    async fn update(&self, update: PortfolioUpdate) -> Result<Portfolio>;

    /// Deletes a portfolio; the store cascades to dependent rows.
    async fn delete(&self, portfolio_id: &str) -> Result<()>;

    fn get_by_id(&self, portfolio_id: &str) -> Result<Portfolio>;

    fn list_by_user(&self, user_id: &str) -> Result<Vec<Portfolio>>;
}

/// Trait defining the contract for Portfolio service operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    async fn create_portfolio(&self, user_id: &str, input: NewPortfolio) -> Result<Portfolio>;
    async fn update_portfolio(&self, update: PortfolioUpdate) -> Result<Portfolio>;
    async fn delete_portfolio(&self, portfolio_id: &str) -> Result<()>;
    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio>;
    fn list_portfolios(&self, user_id: &str) -> Result<Vec<Portfolio>>;
}
