//! SQLite storage implementation for portfolios.

mod model;
mod repository;

pub use model::PortfolioDB;
pub use repository::PortfolioRepository;

pub(crate) use repository::{find_by_account, set_cash_balance};
