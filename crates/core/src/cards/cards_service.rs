use std::sync::Arc;

use rust_decimal::Decimal;

use super::cards_model::{Card, NewCard};
use super::cards_traits::{CardRepositoryTrait, CardServiceTrait};
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Service for the card catalog.
pub struct CardService {
    repository: Arc<dyn CardRepositoryTrait>,
}

impl CardService {
    pub fn new(repository: Arc<dyn CardRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl CardServiceTrait for CardService {
    fn get_card(&self, card_id: &str) -> Result<Card> {
        self.repository.get_by_id(card_id)
    }

    fn list_cards(&self) -> Result<Vec<Card>> {
        self.repository.list()
    }

    async fn create_card(&self, new_card: NewCard) -> Result<Card> {
        new_card.validate()?;
        self.repository.create(new_card).await
    }

    async fn update_card_price(&self, card_id: String, price: Decimal) -> Result<Card> {
        if price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Card price must be positive".to_string(),
            )));
        }
        self.repository.update_price(card_id, price).await
    }
}
