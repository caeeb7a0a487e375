use log::debug;
use std::sync::Arc;

use super::portfolios_model::{CashAdjustment, Portfolio, PortfolioSummary};
use super::portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
use crate::constants::starting_cash;
use crate::errors::Result;
use crate::holdings::{holdings_value, HoldingRepositoryTrait};

/// Service for the portfolio read path and direct cash adjustments.
pub struct PortfolioService {
    repository: Arc<dyn PortfolioRepositoryTrait>,
    holdings_repository: Arc<dyn HoldingRepositoryTrait>,
}

impl PortfolioService {
    pub fn new(
        repository: Arc<dyn PortfolioRepositoryTrait>,
        holdings_repository: Arc<dyn HoldingRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            holdings_repository,
        }
    }
}

#[async_trait::async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolio(&self, account_id: &str) -> Result<PortfolioSummary> {
        let mut portfolio = self
            .repository
            .get_or_create(account_id, starting_cash())
            .await?;

        let holdings = self.holdings_repository.list_by_portfolio(&portfolio.id)?;
        let total_value = holdings_value(&holdings);

        // The stored total is derived; persist only when it drifted.
        if total_value != portfolio.total_value {
            debug!(
                "Refreshing portfolio {} valuation: {} -> {}",
                portfolio.id, portfolio.total_value, total_value
            );
            self.repository
                .save_total_value(portfolio.id.clone(), total_value)
                .await?;
            portfolio.total_value = total_value;
        }

        Ok(PortfolioSummary {
            portfolio,
            holdings,
        })
    }

    async fn adjust_cash(&self, adjustment: CashAdjustment) -> Result<Portfolio> {
        adjustment.validate()?;
        self.repository.adjust_cash(adjustment).await
    }
}
