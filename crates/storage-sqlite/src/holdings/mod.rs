//! SQLite storage implementation for holdings.

mod model;
mod repository;

pub use model::HoldingDB;
pub use repository::HoldingRepository;

pub(crate) use repository::find_by_card_tx;
