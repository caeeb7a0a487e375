//! Tests for the pure settlement planner.

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::holdings::Holding;
    use crate::orders::{
        plan_cancellation, plan_settlement, HoldingChange, NewOrder, Order, OrderError, OrderSide,
        OrderStatus, OrderType,
    };
    use crate::portfolios::PortfolioError;
    use crate::Error;

    fn new_order(side: OrderSide, order_type: OrderType, quantity: i32, price: Decimal) -> NewOrder {
        NewOrder {
            account_id: "acct-1".to_string(),
            card_id: "base1-4".to_string(),
            quantity,
            price,
            order_type,
            side,
        }
    }

    fn holding(quantity: i32, current_price: Decimal) -> Holding {
        Holding {
            id: "h-1".to_string(),
            portfolio_id: "p-1".to_string(),
            card_id: "base1-4".to_string(),
            quantity,
            average_cost: current_price,
            current_price,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn order(side: OrderSide, status: OrderStatus, quantity: i32, price: Decimal) -> Order {
        Order {
            id: "o-1".to_string(),
            portfolio_id: "p-1".to_string(),
            card_id: "base1-4".to_string(),
            order_type: OrderType::Limit,
            side,
            quantity,
            price,
            status,
            created_at: NaiveDateTime::default(),
            filled_at: None,
        }
    }

    // ==================== Market buy ====================

    #[test]
    fn market_buy_debits_cash_and_creates_holding() {
        let input = new_order(OrderSide::Buy, OrderType::Market, 2, dec!(100));
        let plan = plan_settlement(&input, dec!(1000), None).unwrap();

        assert_eq!(plan.status, OrderStatus::Filled);
        assert_eq!(plan.cash_after, Some(dec!(800)));
        assert_eq!(plan.ledger_amount, Some(dec!(200)));
        assert_eq!(
            plan.holding_change,
            Some(HoldingChange::Create {
                card_id: "base1-4".to_string(),
                quantity: 2,
                price: dec!(100),
            })
        );
    }

    #[test]
    fn market_buy_increments_existing_holding() {
        let input = new_order(OrderSide::Buy, OrderType::Market, 3, dec!(50));
        let held = holding(2, dec!(40));
        let plan = plan_settlement(&input, dec!(1000), Some(&held)).unwrap();

        assert_eq!(plan.cash_after, Some(dec!(850)));
        assert_eq!(
            plan.holding_change,
            Some(HoldingChange::Increase {
                holding_id: "h-1".to_string(),
                quantity_after: 5,
                price: dec!(50),
            })
        );
    }

    #[test]
    fn market_buy_exact_balance_is_accepted() {
        let input = new_order(OrderSide::Buy, OrderType::Market, 2, dec!(500));
        let plan = plan_settlement(&input, dec!(1000), None).unwrap();
        assert_eq!(plan.cash_after, Some(Decimal::ZERO));
    }

    #[test]
    fn buy_with_insufficient_funds_is_rejected() {
        let input = new_order(OrderSide::Buy, OrderType::Market, 1, dec!(100));
        match plan_settlement(&input, dec!(50), None) {
            Err(Error::Portfolio(PortfolioError::InsufficientFunds {
                required,
                available,
            })) => {
                assert_eq!(required, dec!(100));
                assert_eq!(available, dec!(50));
            }
            other => panic!("expected InsufficientFunds, got {:?}", other),
        }
    }

    // ==================== Market sell ====================

    #[test]
    fn market_sell_credits_cash_and_reduces_holding() {
        let input = new_order(OrderSide::Sell, OrderType::Market, 1, dec!(120));
        let held = holding(2, dec!(100));
        let plan = plan_settlement(&input, dec!(800), Some(&held)).unwrap();

        assert_eq!(plan.status, OrderStatus::Filled);
        assert_eq!(plan.cash_after, Some(dec!(920)));
        assert_eq!(plan.ledger_amount, Some(dec!(120)));
        assert_eq!(
            plan.holding_change,
            Some(HoldingChange::Reduce {
                holding_id: "h-1".to_string(),
                quantity_after: 1,
                price: dec!(120),
            })
        );
    }

    #[test]
    fn market_sell_of_entire_position_removes_holding() {
        let input = new_order(OrderSide::Sell, OrderType::Market, 2, dec!(110));
        let held = holding(2, dec!(100));
        let plan = plan_settlement(&input, dec!(0), Some(&held)).unwrap();

        assert_eq!(plan.cash_after, Some(dec!(220)));
        assert_eq!(
            plan.holding_change,
            Some(HoldingChange::Remove {
                holding_id: "h-1".to_string(),
            })
        );
    }

    #[test]
    fn sell_without_holding_is_rejected() {
        let input = new_order(OrderSide::Sell, OrderType::Market, 1, dec!(100));
        match plan_settlement(&input, dec!(1000), None) {
            Err(Error::Order(OrderError::HoldingNotFound(card_id))) => {
                assert_eq!(card_id, "base1-4");
            }
            other => panic!("expected HoldingNotFound, got {:?}", other),
        }
    }

    #[test]
    fn sell_of_more_than_held_is_rejected() {
        let input = new_order(OrderSide::Sell, OrderType::Market, 5, dec!(100));
        let held = holding(2, dec!(100));
        match plan_settlement(&input, dec!(1000), Some(&held)) {
            Err(Error::Order(OrderError::InsufficientQuantity { requested, held })) => {
                assert_eq!(requested, 5);
                assert_eq!(held, 2);
            }
            other => panic!("expected InsufficientQuantity, got {:?}", other),
        }
    }

    // ==================== Limit orders ====================

    #[test]
    fn limit_buy_stays_open_and_reserves_funds() {
        let input = new_order(OrderSide::Buy, OrderType::Limit, 2, dec!(100));
        let plan = plan_settlement(&input, dec!(1000), None).unwrap();

        assert_eq!(plan.status, OrderStatus::Open);
        assert_eq!(plan.cash_after, Some(dec!(800)));
        assert!(plan.holding_change.is_none());
        assert!(plan.ledger_amount.is_none());
    }

    #[test]
    fn limit_buy_requires_sufficient_funds_for_the_reservation() {
        let input = new_order(OrderSide::Buy, OrderType::Limit, 2, dec!(100));
        assert!(matches!(
            plan_settlement(&input, dec!(150), None),
            Err(Error::Portfolio(PortfolioError::InsufficientFunds { .. }))
        ));
    }

    #[test]
    fn limit_sell_stays_open_and_touches_nothing() {
        let input = new_order(OrderSide::Sell, OrderType::Limit, 1, dec!(100));
        let held = holding(3, dec!(90));
        let plan = plan_settlement(&input, dec!(1000), Some(&held)).unwrap();

        assert_eq!(plan.status, OrderStatus::Open);
        assert!(plan.cash_after.is_none());
        assert!(plan.holding_change.is_none());
        assert!(plan.ledger_amount.is_none());
    }

    #[test]
    fn limit_sell_still_requires_the_holding() {
        let input = new_order(OrderSide::Sell, OrderType::Limit, 1, dec!(100));
        assert!(matches!(
            plan_settlement(&input, dec!(1000), None),
            Err(Error::Order(OrderError::HoldingNotFound(_)))
        ));
    }

    // ==================== Cancellation ====================

    #[test]
    fn cancelling_open_buy_refunds_reserved_funds() {
        let open = order(OrderSide::Buy, OrderStatus::Open, 2, dec!(100));
        let plan = plan_cancellation(&open, dec!(300)).unwrap();
        assert_eq!(plan.cash_after, Some(dec!(500)));
    }

    #[test]
    fn cancelling_open_sell_changes_no_balance() {
        let open = order(OrderSide::Sell, OrderStatus::Open, 2, dec!(100));
        let plan = plan_cancellation(&open, dec!(300)).unwrap();
        assert!(plan.cash_after.is_none());
    }

    #[test]
    fn cancelling_non_open_order_is_rejected() {
        for status in [
            OrderStatus::Filled,
            OrderStatus::Cancelled,
            OrderStatus::Expired,
        ] {
            let terminal = order(OrderSide::Buy, status, 1, dec!(100));
            match plan_cancellation(&terminal, dec!(300)) {
                Err(Error::Order(OrderError::InvalidState {
                    order_id,
                    status: reported,
                })) => {
                    assert_eq!(order_id, "o-1");
                    assert_eq!(reported, status);
                }
                other => panic!("expected InvalidState, got {:?}", other),
            }
        }
    }

    // ==================== End-to-end trade walk-through ====================

    #[test]
    fn buy_then_sell_down_to_zero_walks_the_expected_balances() {
        // Start: cash 1000, no holding.
        let buy = new_order(OrderSide::Buy, OrderType::Market, 2, dec!(100));
        let plan = plan_settlement(&buy, dec!(1000), None).unwrap();
        assert_eq!(plan.cash_after, Some(dec!(800)));
        let mut held = holding(2, dec!(100));

        // Sell 1 at 120: cash 920, quantity 1, price refreshed.
        let sell1 = new_order(OrderSide::Sell, OrderType::Market, 1, dec!(120));
        let plan = plan_settlement(&sell1, dec!(800), Some(&held)).unwrap();
        assert_eq!(plan.cash_after, Some(dec!(920)));
        match plan.holding_change.unwrap() {
            HoldingChange::Reduce {
                quantity_after,
                price,
                ..
            } => {
                held.quantity = quantity_after;
                held.current_price = price;
                assert_eq!(quantity_after, 1);
            }
            other => panic!("expected Reduce, got {:?}", other),
        }

        // Sell the last one at 110: cash 1030, holding removed.
        let sell2 = new_order(OrderSide::Sell, OrderType::Market, 1, dec!(110));
        let plan = plan_settlement(&sell2, dec!(920), Some(&held)).unwrap();
        assert_eq!(plan.cash_after, Some(dec!(1030)));
        assert!(matches!(
            plan.holding_change,
            Some(HoldingChange::Remove { .. })
        ));
    }
}
