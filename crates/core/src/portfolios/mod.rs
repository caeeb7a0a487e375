//! Portfolios module - account cash balance and valuation.

mod portfolios_errors;
mod portfolios_model;
mod portfolios_service;
mod portfolios_traits;


pub use portfolios_errors::PortfolioError;
pub use portfolios_model::{CashAdjustment, CashOperation, Portfolio, PortfolioSummary};
pub use portfolios_service::PortfolioService;
pub use portfolios_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};
