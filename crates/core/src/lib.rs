//! PokeTrade Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the PokeTrade settlement
//! service. It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod cards;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod ledger;
pub mod orders;
pub mod portfolios;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
