use rust_decimal::Decimal;

/// Cash balance seeded into a portfolio created on first access.
pub const STARTING_CASH_UNITS: i64 = 10_000;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Starting cash as a `Decimal`.
pub fn starting_cash() -> Decimal {
    Decimal::new(STARTING_CASH_UNITS, 0)
}
