use std::sync::Arc;

use super::ledger_model::LedgerEntry;
use super::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
use crate::errors::Result;
use crate::portfolios::PortfolioRepositoryTrait;

/// Read-side service over the ledger.
pub struct LedgerService {
    repository: Arc<dyn LedgerRepositoryTrait>,
    portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
}

impl LedgerService {
    pub fn new(
        repository: Arc<dyn LedgerRepositoryTrait>,
        portfolio_repository: Arc<dyn PortfolioRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            portfolio_repository,
        }
    }
}

impl LedgerServiceTrait for LedgerService {
    fn get_ledger(&self, account_id: &str) -> Result<Vec<LedgerEntry>> {
        let portfolio = self.portfolio_repository.get_by_account(account_id)?;
        self.repository.list_by_portfolio(&portfolio.id)
    }
}
