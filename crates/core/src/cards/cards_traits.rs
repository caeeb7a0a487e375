//! Card repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::cards_model::{Card, NewCard};
use crate::errors::Result;

#[async_trait]
pub trait CardRepositoryTrait: Send + Sync {
    /// Retrieves a card by its catalog id.
    fn get_by_id(&self, card_id: &str) -> Result<Card>;

    /// Lists the catalog, ordered by name.
    fn list(&self) -> Result<Vec<Card>>;

    /// Registers a new catalog card.
    async fn create(&self, new_card: NewCard) -> Result<Card>;

    /// Updates a card's quoted reference price.
    async fn update_price(&self, card_id: String, price: Decimal) -> Result<Card>;
}

#[async_trait]
pub trait CardServiceTrait: Send + Sync {
    fn get_card(&self, card_id: &str) -> Result<Card>;

    fn list_cards(&self) -> Result<Vec<Card>>;

    async fn create_card(&self, new_card: NewCard) -> Result<Card>;

    async fn update_card_price(&self, card_id: String, price: Decimal) -> Result<Card>;
}
