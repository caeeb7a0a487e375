//! Small conversion helpers shared by the row models.

use poketrade_core::errors::{DatabaseError, Error, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a decimal stored as TEXT, tolerating blank or malformed values.
///
/// SQLite has no native decimal type, so monetary columns are stored as
/// strings. For display-side prices a missing or unparseable value degrades
/// to zero rather than failing the whole row.
pub(crate) fn parse_decimal_string_tolerant(value: &str) -> Decimal {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed).unwrap_or_else(|_| {
        log::warn!("Failed to parse decimal from string: '{}'", value);
        Decimal::ZERO
    })
}

/// Parse a decimal stored as TEXT, failing on malformed values.
///
/// Used for the cash balance column: degrading a corrupt balance to zero
/// would let the next settlement persist the wrong amount, so a row that
/// cannot be parsed is surfaced as a database error instead.
pub(crate) fn parse_decimal_column(value: &str, column: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|e| {
        Error::Database(DatabaseError::Internal(format!(
            "Corrupt decimal in {column}: '{value}' ({e})"
        )))
    })
}
