//! Portfolio domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::Holding;
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing an account's portfolio: its cash balance and
/// the derived total valuation of its holdings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    /// External account identifier (owned by the identity provider).
    pub account_id: String,
    pub cash_balance: Decimal,
    /// Derived value, recomputed lazily on read. Not a source of truth.
    pub total_value: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Portfolio read-path response: the portfolio plus its current holdings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub portfolio: Portfolio,
    pub holdings: Vec<Holding>,
}

/// Direct cash-balance operation, used for deposits and admin adjustments
/// outside the order flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashOperation {
    Add,
    Subtract,
    Set,
}

/// Input model for a direct cash adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashAdjustment {
    pub account_id: String,
    pub amount: Decimal,
    pub operation: CashOperation,
}

impl CashAdjustment {
    /// Validates the adjustment before it reaches the store.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Adjustment amount cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
