//! Portfolio repository and service traits.
//!
//! These traits define the contract for portfolio operations without any
//! database-specific types, allowing for different storage implementations.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::portfolios_model::{CashAdjustment, Portfolio, PortfolioSummary};
use crate::errors::Result;

/// Trait defining the contract for Portfolio repository operations.
#[async_trait]
pub trait PortfolioRepositoryTrait: Send + Sync {
    /// Retrieves a portfolio by its external account id.
    fn get_by_account(&self, account_id: &str) -> Result<Portfolio>;

    /// Retrieves the portfolio for an account, creating it with the given
    /// starting cash balance if it does not exist yet.
    async fn get_or_create(&self, account_id: &str, starting_cash: Decimal) -> Result<Portfolio>;

    /// Applies a direct cash adjustment atomically. A `subtract` that would
    /// drive the balance negative fails with `InsufficientFunds`.
    async fn adjust_cash(&self, adjustment: CashAdjustment) -> Result<Portfolio>;

    /// Persists a recomputed total valuation for the portfolio.
    async fn save_total_value(&self, portfolio_id: String, total_value: Decimal) -> Result<()>;
}

/// Trait defining the contract for Portfolio service operations.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Returns the account's portfolio and holdings, lazily creating the
    /// portfolio and refreshing the stored valuation when it drifted.
    async fn get_portfolio(&self, account_id: &str) -> Result<PortfolioSummary>;

    /// Applies a direct cash adjustment with input validation.
    async fn adjust_cash(&self, adjustment: CashAdjustment) -> Result<Portfolio>;
}
