//! Database model for holdings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poketrade_core::holdings::Holding;

use crate::utils::parse_decimal_string_tolerant;

/// Database model for holdings
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
#[diesel(table_name = crate::schema::holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub id: String,
    pub portfolio_id: String,
    pub card_id: String,
    pub quantity: i32,
    pub average_cost: String,
    pub current_price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<HoldingDB> for Holding {
    fn from(db: HoldingDB) -> Self {
        Self {
            id: db.id,
            portfolio_id: db.portfolio_id,
            card_id: db.card_id,
            quantity: db.quantity,
            average_cost: parse_decimal_string_tolerant(&db.average_cost),
            current_price: parse_decimal_string_tolerant(&db.current_price),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}
