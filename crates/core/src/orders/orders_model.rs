//! Order domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::LedgerEntry;
use crate::{errors::ValidationError, Error, Result};

/// How an order executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Executes immediately at the supplied price.
    Market,
    /// Created OPEN and never progressed automatically; there is no matching
    /// engine. Limit orders are inert placeholders until cancelled.
    Limit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown order type '{other}'"
            )))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "BUY",
            OrderSide::Sell => "SELL",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown order side '{other}'"
            )))),
        }
    }
}

/// Order lifecycle. `Open` is the sole initial state; the other three are
/// terminal. Nothing in this system transitions orders into `Expired`; the
/// value is carried for schema fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Open,
    Filled,
    Cancelled,
    Expired,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "OPEN",
            OrderStatus::Filled => "FILLED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::Expired => "EXPIRED",
        }
    }

    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "OPEN" => Ok(OrderStatus::Open),
            "FILLED" => Ok(OrderStatus::Filled),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            "EXPIRED" => Ok(OrderStatus::Expired),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown order status '{other}'"
            )))),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, OrderStatus::Open)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain model representing an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub portfolio_id: String,
    pub card_id: String,
    pub order_type: OrderType,
    pub side: OrderSide,
    pub quantity: i32,
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub filled_at: Option<NaiveDateTime>,
}

impl Order {
    /// Notional value of the order.
    pub fn amount(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Input model for submitting an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub account_id: String,
    pub card_id: String,
    pub quantity: i32,
    pub price: Decimal,
    pub order_type: OrderType,
    pub side: OrderSide,
}

impl NewOrder {
    /// Validates the order input before any lookup or mutation.
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.card_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "cardId".to_string(),
            )));
        }
        if self.quantity <= 0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Order quantity must be positive".to_string(),
            )));
        }
        if self.price <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Order price must be positive".to_string(),
            )));
        }
        Ok(())
    }

    pub fn amount(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Result of submitting an order: the order itself, plus the ledger entry
/// when the order filled immediately (market orders only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFill {
    pub order: Order,
    pub ledger_entry: Option<LedgerEntry>,
}
