//! Holding repository trait.
//!
//! Holdings are mutated exclusively inside the order settlement transaction,
//! so the repository contract only exposes reads.

use super::holdings_model::Holding;
use crate::errors::Result;

pub trait HoldingRepositoryTrait: Send + Sync {
    /// Lists the current holdings of a portfolio.
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<Holding>>;

    /// Finds the holding for a specific card, if any.
    fn find_by_card(&self, portfolio_id: &str, card_id: &str) -> Result<Option<Holding>>;
}
