//! Database model for catalog cards.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poketrade_core::cards::{Card, NewCard};

use crate::utils::parse_decimal_string_tolerant;

/// Database model for catalog cards
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
#[diesel(table_name = crate::schema::cards)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CardDB {
    pub id: String,
    pub name: String,
    pub set_name: Option<String>,
    pub rarity: Option<String>,
    pub image_url: Option<String>,
    pub current_price: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<CardDB> for Card {
    fn from(db: CardDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            set_name: db.set_name,
            rarity: db.rarity,
            image_url: db.image_url,
            current_price: parse_decimal_string_tolerant(&db.current_price),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<NewCard> for CardDB {
    fn from(domain: NewCard) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: domain.id.unwrap_or_default(),
            name: domain.name,
            set_name: domain.set_name,
            rarity: domain.rarity,
            image_url: domain.image_url,
            current_price: domain.current_price.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}
