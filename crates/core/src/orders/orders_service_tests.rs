//! Tests for the order service orchestration.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::cards::{Card, CardRepositoryTrait, NewCard};
    use crate::errors::{DatabaseError, Result};
    use crate::orders::{
        NewOrder, Order, OrderFill, OrderRepositoryTrait, OrderService, OrderServiceTrait,
        OrderSide, OrderStatus, OrderType,
    };
    use crate::Error;

    struct StubCardRepository {
        known_card: Option<Card>,
    }

    #[async_trait]
    impl CardRepositoryTrait for StubCardRepository {
        fn get_by_id(&self, card_id: &str) -> Result<Card> {
            self.known_card
                .clone()
                .filter(|c| c.id == card_id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound(format!("Card {card_id}")))
                })
        }

        fn list(&self) -> Result<Vec<Card>> {
            Ok(self.known_card.clone().into_iter().collect())
        }

        async fn create(&self, _new_card: NewCard) -> Result<Card> {
            unimplemented!("not used in these tests")
        }

        async fn update_price(&self, _card_id: String, _price: Decimal) -> Result<Card> {
            unimplemented!("not used in these tests")
        }
    }

    struct RecordingOrderRepository {
        submissions: AtomicUsize,
    }

    #[async_trait]
    impl OrderRepositoryTrait for RecordingOrderRepository {
        async fn submit(&self, new_order: NewOrder) -> Result<OrderFill> {
            self.submissions.fetch_add(1, Ordering::SeqCst);
            let now = Utc::now().naive_utc();
            Ok(OrderFill {
                order: Order {
                    id: "o-1".to_string(),
                    portfolio_id: "p-1".to_string(),
                    card_id: new_order.card_id,
                    order_type: new_order.order_type,
                    side: new_order.side,
                    quantity: new_order.quantity,
                    price: new_order.price,
                    status: OrderStatus::Filled,
                    created_at: now,
                    filled_at: Some(now),
                },
                ledger_entry: None,
            })
        }

        async fn cancel(&self, order_id: String, _account_id: String) -> Result<Order> {
            Ok(Order {
                id: order_id,
                portfolio_id: "p-1".to_string(),
                card_id: "base1-4".to_string(),
                order_type: OrderType::Limit,
                side: OrderSide::Buy,
                quantity: 1,
                price: dec!(100),
                status: OrderStatus::Cancelled,
                created_at: Utc::now().naive_utc(),
                filled_at: None,
            })
        }

        fn get_by_id(&self, _order_id: &str) -> Result<Order> {
            unimplemented!("not used in these tests")
        }

        fn list_by_account(&self, _account_id: &str) -> Result<Vec<Order>> {
            Ok(vec![])
        }
    }

    fn service_with(known_card: Option<Card>) -> (OrderService, Arc<RecordingOrderRepository>) {
        let orders = Arc::new(RecordingOrderRepository {
            submissions: AtomicUsize::new(0),
        });
        let cards = Arc::new(StubCardRepository { known_card });
        (OrderService::new(orders.clone(), cards), orders)
    }

    fn card() -> Card {
        Card {
            id: "base1-4".to_string(),
            name: "Charizard".to_string(),
            current_price: dec!(420),
            ..Default::default()
        }
    }

    fn new_order() -> NewOrder {
        NewOrder {
            account_id: "acct-1".to_string(),
            card_id: "base1-4".to_string(),
            quantity: 1,
            price: dec!(100),
            order_type: OrderType::Market,
            side: OrderSide::Buy,
        }
    }

    #[tokio::test]
    async fn submit_order_delegates_to_the_repository() {
        let (service, orders) = service_with(Some(card()));
        let fill = service.submit_order(new_order()).await.unwrap();
        assert_eq!(fill.order.status, OrderStatus::Filled);
        assert_eq!(orders.submissions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn submit_order_rejects_unknown_cards_before_any_mutation() {
        let (service, orders) = service_with(None);
        let err = service.submit_order(new_order()).await.unwrap_err();
        assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
        assert_eq!(orders.submissions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn submit_order_rejects_invalid_input_before_any_lookup() {
        let (service, orders) = service_with(Some(card()));
        let mut bad = new_order();
        bad.quantity = 0;
        let err = service.submit_order(bad).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(orders.submissions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancel_order_returns_the_cancelled_order() {
        let (service, _) = service_with(Some(card()));
        let order = service.cancel_order("o-9", "acct-1").await.unwrap();
        assert_eq!(order.id, "o-9");
        assert_eq!(order.status, OrderStatus::Cancelled);
    }
}
