//! Holding domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quantity of one catalog card owned by a portfolio.
///
/// A holding row exists only while its quantity is positive; a sell that
/// brings the quantity to exactly zero deletes the row.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub portfolio_id: String,
    pub card_id: String,
    pub quantity: i32,
    /// Execution price of the purchase that created the holding.
    pub average_cost: Decimal,
    /// Last execution price seen for this card.
    pub current_price: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Holding {
    /// Market value of the position at the last seen price.
    pub fn market_value(&self) -> Decimal {
        self.current_price * Decimal::from(self.quantity)
    }
}

/// Total valuation of a set of holdings.
pub fn holdings_value(holdings: &[Holding]) -> Decimal {
    holdings.iter().map(Holding::market_value).sum()
}
