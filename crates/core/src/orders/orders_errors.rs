use thiserror::Error;

use super::orders_model::OrderStatus;

/// Errors raised by order submission and cancellation.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("No holding of card {0} in this portfolio")]
    HoldingNotFound(String),

    #[error("Insufficient quantity: requested {requested}, held {held}")]
    InsufficientQuantity { requested: i32, held: i32 },

    #[error("Order {0} does not belong to the requesting account")]
    Unauthorized(String),

    #[error("Order {order_id} is {status}; only OPEN orders may transition")]
    InvalidState {
        order_id: String,
        status: OrderStatus,
    },

    #[error("Unsupported order action: {0}")]
    UnsupportedAction(String),
}
