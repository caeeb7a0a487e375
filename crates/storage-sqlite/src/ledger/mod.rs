//! SQLite storage implementation for the trade ledger.

mod model;
mod repository;

pub use model::LedgerEntryDB;
pub use repository::LedgerRepository;
