//! SQLite storage implementation for the card catalog.

mod model;
mod repository;

pub use model::CardDB;
pub use repository::CardRepository;
