use log::debug;
use std::sync::Arc;

use super::orders_model::{NewOrder, Order, OrderFill};
use super::orders_traits::{OrderRepositoryTrait, OrderServiceTrait};
use crate::cards::CardRepositoryTrait;
use crate::errors::Result;

/// Service for order submission, cancellation, and reads.
pub struct OrderService {
    repository: Arc<dyn OrderRepositoryTrait>,
    card_repository: Arc<dyn CardRepositoryTrait>,
}

impl OrderService {
    pub fn new(
        repository: Arc<dyn OrderRepositoryTrait>,
        card_repository: Arc<dyn CardRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            card_repository,
        }
    }
}

#[async_trait::async_trait]
impl OrderServiceTrait for OrderService {
    async fn submit_order(&self, new_order: NewOrder) -> Result<OrderFill> {
        new_order.validate()?;

        // The referenced catalog card must exist before any mutation.
        let card = self.card_repository.get_by_id(&new_order.card_id)?;
        debug!(
            "Submitting {} {} order for {} x{} at {}",
            new_order.order_type.as_str(),
            new_order.side.as_str(),
            card.id,
            new_order.quantity,
            new_order.price
        );

        let fill = self.repository.submit(new_order).await?;
        debug!(
            "Order {} recorded with status {}",
            fill.order.id, fill.order.status
        );
        Ok(fill)
    }

    async fn cancel_order(&self, order_id: &str, account_id: &str) -> Result<Order> {
        let order = self
            .repository
            .cancel(order_id.to_string(), account_id.to_string())
            .await?;
        debug!("Order {} cancelled", order.id);
        Ok(order)
    }

    fn get_order(&self, order_id: &str) -> Result<Order> {
        self.repository.get_by_id(order_id)
    }

    fn get_orders(&self, account_id: &str) -> Result<Vec<Order>> {
        self.repository.list_by_account(account_id)
    }
}
