//! Holdings module - quantities of catalog cards owned by a portfolio.

mod holdings_model;
mod holdings_traits;


pub use holdings_model::{holdings_value, Holding};
pub use holdings_traits::HoldingRepositoryTrait;
