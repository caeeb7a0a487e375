//! Ledger module - immutable records of filled orders.

mod ledger_model;
mod ledger_service;
mod ledger_traits;

pub use ledger_model::LedgerEntry;
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};
