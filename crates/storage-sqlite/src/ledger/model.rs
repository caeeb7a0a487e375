//! Database model for ledger entries.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poketrade_core::ledger::LedgerEntry;
use poketrade_core::orders::OrderSide;
use poketrade_core::Result;

use crate::utils::parse_decimal_string_tolerant;

/// Database model for ledger entries
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::ledger_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LedgerEntryDB {
    pub id: String,
    pub order_id: String,
    pub portfolio_id: String,
    pub card_id: String,
    pub side: String,
    pub quantity: i32,
    pub price: String,
    pub amount: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<LedgerEntryDB> for LedgerEntry {
    type Error = poketrade_core::Error;

    fn try_from(db: LedgerEntryDB) -> Result<Self> {
        Ok(Self {
            id: db.id,
            order_id: db.order_id,
            portfolio_id: db.portfolio_id,
            card_id: db.card_id,
            side: OrderSide::parse(&db.side)?,
            quantity: db.quantity,
            price: parse_decimal_string_tolerant(&db.price),
            amount: parse_decimal_string_tolerant(&db.amount),
            description: db.description,
            created_at: db.created_at,
        })
    }
}
