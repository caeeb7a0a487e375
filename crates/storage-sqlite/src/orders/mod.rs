//! SQLite storage implementation for orders and their settlement.

mod model;
mod repository;

pub use model::OrderDB;
pub use repository::OrderRepository;
