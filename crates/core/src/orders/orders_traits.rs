//! Order repository and service traits.
//!
//! The repository contract exposes submission and cancellation as single
//! atomic operations: the storage implementation re-reads portfolio and
//! holding state inside its write transaction, runs the settlement planner,
//! and applies the resulting mutations, so either everything commits or
//! nothing does.

use async_trait::async_trait;

use super::orders_model::{NewOrder, Order, OrderFill};
use crate::errors::Result;

#[async_trait]
pub trait OrderRepositoryTrait: Send + Sync {
    /// Atomically creates the order and, for market orders, settles it:
    /// cash, holding, and ledger mutations all commit together or roll back.
    async fn submit(&self, new_order: NewOrder) -> Result<OrderFill>;

    /// Atomically cancels an OPEN order owned by the account, refunding
    /// reserved funds for BUY orders.
    async fn cancel(&self, order_id: String, account_id: String) -> Result<Order>;

    /// Retrieves an order by its id.
    fn get_by_id(&self, order_id: &str) -> Result<Order>;

    /// Lists an account's orders, most recent first.
    fn list_by_account(&self, account_id: &str) -> Result<Vec<Order>>;
}

#[async_trait]
pub trait OrderServiceTrait: Send + Sync {
    /// Validates and submits an order; market orders settle immediately.
    async fn submit_order(&self, new_order: NewOrder) -> Result<OrderFill>;

    /// Cancels an OPEN order on behalf of the account that owns it.
    async fn cancel_order(&self, order_id: &str, account_id: &str) -> Result<Order>;

    /// Retrieves an order by its id.
    fn get_order(&self, order_id: &str) -> Result<Order>;

    /// Lists an account's orders, most recent first.
    fn get_orders(&self, account_id: &str) -> Result<Vec<Order>>;
}
