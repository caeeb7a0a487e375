use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use poketrade_core::cards::{Card, CardRepositoryTrait, NewCard};
use poketrade_core::Result;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::cards;
use crate::schema::cards::dsl::*;

use super::model::CardDB;

/// Repository for managing the card catalog in the database
pub struct CardRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CardRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CardRepositoryTrait for CardRepository {
    fn get_by_id(&self, card_id: &str) -> Result<Card> {
        let mut conn = get_connection(&self.pool)?;

        let card = cards
            .select(CardDB::as_select())
            .find(card_id)
            .first::<CardDB>(&mut conn)
            .into_core()?;

        Ok(card.into())
    }

    fn list(&self) -> Result<Vec<Card>> {
        let mut conn = get_connection(&self.pool)?;

        let results = cards
            .select(CardDB::as_select())
            .order(name.asc())
            .load::<CardDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Card::from).collect())
    }

    async fn create(&self, new_card: NewCard) -> Result<Card> {
        new_card.validate()?;

        self.writer
            .exec(move |conn| {
                let mut card_db: CardDB = new_card.into();
                if card_db.id.is_empty() {
                    card_db.id = uuid::Uuid::new_v4().to_string();
                }

                diesel::insert_into(cards::table)
                    .values(&card_db)
                    .execute(conn)
                    .into_core()?;

                Ok(card_db.into())
            })
            .await
    }

    async fn update_price(&self, card_id: String, price: Decimal) -> Result<Card> {
        self.writer
            .exec(move |conn| {
                let now = chrono::Utc::now().naive_utc();

                diesel::update(cards.find(&card_id))
                    .set((current_price.eq(price.to_string()), updated_at.eq(now)))
                    .execute(conn)
                    .into_core()?;

                let card = cards
                    .select(CardDB::as_select())
                    .find(&card_id)
                    .first::<CardDB>(conn)
                    .into_core()?;

                Ok(card.into())
            })
            .await
    }
}
