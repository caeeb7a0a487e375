//! Ledger repository and service traits.
//!
//! Entries are inserted inside the settlement transaction by the order
//! repository; this contract only exposes reads.

use super::ledger_model::LedgerEntry;
use crate::errors::Result;

pub trait LedgerRepositoryTrait: Send + Sync {
    /// Lists a portfolio's ledger entries, most recent first.
    fn list_by_portfolio(&self, portfolio_id: &str) -> Result<Vec<LedgerEntry>>;
}

pub trait LedgerServiceTrait: Send + Sync {
    /// Lists an account's ledger entries, most recent first.
    fn get_ledger(&self, account_id: &str) -> Result<Vec<LedgerEntry>>;
}
