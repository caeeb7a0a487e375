//! SQLite storage implementation for PokeTrade.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `poketrade-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - Repository implementations for all domain entities, including the
//!   atomic order-settlement transaction
//! - Database row models (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates are database-agnostic and work with traits.
//!
//! All mutations go through a single writer actor that owns one connection
//! and runs each job inside an immediate transaction; that serialization is
//! what makes the settlement flow's check-then-act sequences race-free.

pub mod db;
pub mod errors;
pub mod schema;
mod utils;

// Repository implementations
pub mod cards;
pub mod holdings;
pub mod ledger;
pub mod orders;
pub mod portfolios;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from poketrade-core for convenience
pub use poketrade_core::errors::{DatabaseError, Error, Result};
