use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::portfolios_model::{NewPortfolio, Portfolio, PortfolioUpdate};
use super::portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::errors::Result;

/// Service for managing portfolios.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(repository: Arc<dyn PortfolioRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn create_portfolio(&self, user_id: &str, input: NewPortfolio) -> Result<Portfolio> {
        input.validate()?;
        debug!("creating portfolio '{}' for user {}", input.name, user_id);

        let now = Utc::now();
        let portfolio = Portfolio {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: input.name.trim().to_string(),
            fee_amount: input.fee_amount,
            account_number: input.account_number,
            created_at: now,
            updated_at: now,
        };
        self.repository.create(portfolio).await
    }

    async fn update_portfolio(&self, update: PortfolioUpdate) -> Result<Portfolio> {
        update.validate()?;
        self.repository.update(update).await
    }

    async fn delete_portfolio(&self, portfolio_id: &str) -> Result<()> {
        self.repository.delete(portfolio_id).await
    }

    fn get_portfolio(&self, portfolio_id: &str) -> Result<Portfolio> {
        self.repository.get_by_id(portfolio_id)
    }

    fn list_portfolios(&self, user_id: &str) -> Result<Vec<Portfolio>> {
        self.repository.list_by_user(user_id)
    }
}
