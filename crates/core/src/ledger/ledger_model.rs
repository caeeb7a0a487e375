//! Ledger domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::orders::OrderSide;

/// Immutable record of a filled order's financial effect.
///
/// Created only when an order fills, never updated or deleted. At most one
/// entry exists per order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub order_id: String,
    pub portfolio_id: String,
    pub card_id: String,
    pub side: OrderSide,
    pub quantity: i32,
    pub price: Decimal,
    /// `price * quantity`, computed at fill time.
    pub amount: Decimal,
    pub description: String,
    pub created_at: NaiveDateTime,
}
