use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by cash-balance operations.
#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds {
        required: Decimal,
        available: Decimal,
    },

    #[error("Cash balance cannot be negative")]
    NegativeBalance,
}
