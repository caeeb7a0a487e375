//! Database model for orders.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poketrade_core::orders::{NewOrder, Order, OrderStatus};
use poketrade_core::orders::{OrderSide, OrderType};
use poketrade_core::Result;

use crate::utils::parse_decimal_string_tolerant;

/// Database model for orders
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderDB {
    pub id: String,
    pub portfolio_id: String,
    pub card_id: String,
    pub order_type: String,
    pub side: String,
    pub quantity: i32,
    pub price: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub filled_at: Option<NaiveDateTime>,
}

impl OrderDB {
    /// Builds the row for a freshly submitted order. `filled_at` is set only
    /// when the settlement planner decided the order fills immediately.
    pub fn from_new(new_order: &NewOrder, portfolio: &str, status: OrderStatus) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            portfolio_id: portfolio.to_string(),
            card_id: new_order.card_id.clone(),
            order_type: new_order.order_type.as_str().to_string(),
            side: new_order.side.as_str().to_string(),
            quantity: new_order.quantity,
            price: new_order.price.to_string(),
            status: status.as_str().to_string(),
            created_at: now,
            filled_at: (status == OrderStatus::Filled).then_some(now),
        }
    }
}

impl TryFrom<OrderDB> for Order {
    type Error = poketrade_core::Error;

    fn try_from(db: OrderDB) -> Result<Self> {
        Ok(Self {
            id: db.id,
            portfolio_id: db.portfolio_id,
            card_id: db.card_id,
            order_type: OrderType::parse(&db.order_type)?,
            side: OrderSide::parse(&db.side)?,
            quantity: db.quantity,
            price: parse_decimal_string_tolerant(&db.price),
            status: OrderStatus::parse(&db.status)?,
            created_at: db.created_at,
            filled_at: db.filled_at,
        })
    }
}
