//! Card catalog domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A tradable catalog card with its quoted reference price.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// External catalog identifier (e.g. a TCG set/number id).
    pub id: String,
    pub name: String,
    pub set_name: Option<String>,
    pub rarity: Option<String>,
    pub image_url: Option<String>,
    pub current_price: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for registering a catalog card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub set_name: Option<String>,
    pub rarity: Option<String>,
    pub image_url: Option<String>,
    pub current_price: Decimal,
}

impl NewCard {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Card name cannot be empty".to_string(),
            )));
        }
        if self.current_price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Card price must be positive".to_string(),
            )));
        }
        Ok(())
    }
}
