//! Portfolio domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A user's brokerage portfolio.
///
/// Deleting a portfolio cascades to its holdings, cash balances and ledger
/// at the store level; the core only issues the delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    pub user_id: String,
    pub name: String,
    /// Default commission applied to transactions that omit a fee.
    pub fee_amount: Option<Decimal>,
    /// Account number at the broker, free-form.
    pub account_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolio {
    pub name: String,
    pub fee_amount: Option<Decimal>,
    pub account_number: Option<String>,
}

impl NewPortfolio {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Portfolio name cannot be empty".to_string(),
            )));
        }
        if let Some(fee) = self.fee_amount {
            if fee < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Default fee cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Input model for updating an existing portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioUpdate {
    pub id: String,
    pub name: String,
    pub fee_amount: Option<Decimal>,
    pub account_number: Option<String>,
}

impl PortfolioUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "id".to_string(),
            )));
        }
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Portfolio name cannot be empty".to_string(),
            )));
        }
        if let Some(fee) = self.fee_amount {
            if fee < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Default fee cannot be negative".to_string(),
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_blank_name() {
        let input = NewPortfolio {
            name: "   ".to_string(),
            fee_amount: None,
            account_number: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn rejects_negative_default_fee() {
        let input = NewPortfolio {
            name: "IRA".to_string(),
            fee_amount: Some(dec!(-1)),
            account_number: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn accepts_valid_input() {
        let input = NewPortfolio {
            name: "Brokerage".to_string(),
            fee_amount: Some(dec!(7)),
            account_number: Some("123-456".to_string()),
        };
        assert!(input.validate().is_ok());
    }
}
