//! Pure settlement planner.
//!
//! Given an order input and the current portfolio state, these functions
//! either reject the order with a typed error or return the exact set of
//! mutations to apply. The storage layer re-reads state inside its write
//! transaction and applies the plan, so the check-then-act sequence is
//! race-free.

use rust_decimal::Decimal;

use super::orders_errors::OrderError;
use super::orders_model::{NewOrder, Order, OrderSide, OrderStatus, OrderType};
use crate::errors::Result;
use crate::holdings::Holding;
use crate::portfolios::PortfolioError;

/// The holding mutation a fill produces.
#[derive(Debug, Clone, PartialEq)]
pub enum HoldingChange {
    /// First purchase of this card: create the row with
    /// `average_cost = current_price =` execution price.
    Create {
        card_id: String,
        quantity: i32,
        price: Decimal,
    },
    /// Buy into an existing holding: bump the quantity and refresh the
    /// current price to the execution price.
    Increase {
        holding_id: String,
        quantity_after: i32,
        price: Decimal,
    },
    /// Partial sell: reduce the quantity and refresh the current price.
    Reduce {
        holding_id: String,
        quantity_after: i32,
        price: Decimal,
    },
    /// Sell of the entire position: the row is deleted, never kept at zero.
    Remove { holding_id: String },
}

/// Mutations produced by submitting one order.
#[derive(Debug, Clone, PartialEq)]
pub struct SettlementPlan {
    /// `Filled` for market orders, `Open` for limit orders.
    pub status: OrderStatus,
    /// New cash balance, when the order touches cash. A LIMIT BUY reserves
    /// funds at creation, so it carries a debit here even though it stays OPEN.
    pub cash_after: Option<Decimal>,
    /// Holding mutation, market orders only.
    pub holding_change: Option<HoldingChange>,
    /// Ledger amount (`price * quantity`), market orders only.
    pub ledger_amount: Option<Decimal>,
}

/// Mutations produced by cancelling one order.
#[derive(Debug, Clone, PartialEq)]
pub struct CancellationPlan {
    /// New cash balance after refunding reserved funds (BUY orders only).
    pub cash_after: Option<Decimal>,
}

/// Validates an order against the current cash balance and holding, and
/// plans the mutations. No state is touched here.
pub fn plan_settlement(
    order: &NewOrder,
    cash_balance: Decimal,
    holding: Option<&Holding>,
) -> Result<SettlementPlan> {
    let amount = order.amount();

    match order.side {
        OrderSide::Buy => {
            // Funds are checked for market buys (debited at fill) and limit
            // buys (reserved at creation) alike.
            if cash_balance < amount {
                return Err(PortfolioError::InsufficientFunds {
                    required: amount,
                    available: cash_balance,
                }
                .into());
            }
        }
        OrderSide::Sell => {
            let held = holding
                .ok_or_else(|| OrderError::HoldingNotFound(order.card_id.clone()))?
                .quantity;
            if held < order.quantity {
                return Err(OrderError::InsufficientQuantity {
                    requested: order.quantity,
                    held,
                }
                .into());
            }
        }
    }

    match order.order_type {
        OrderType::Limit => Ok(SettlementPlan {
            status: OrderStatus::Open,
            cash_after: match order.side {
                OrderSide::Buy => Some(cash_balance - amount),
                OrderSide::Sell => None,
            },
            holding_change: None,
            ledger_amount: None,
        }),
        OrderType::Market => {
            let (cash_after, holding_change) = match order.side {
                OrderSide::Buy => {
                    let change = match holding {
                        Some(h) => HoldingChange::Increase {
                            holding_id: h.id.clone(),
                            quantity_after: h.quantity + order.quantity,
                            price: order.price,
                        },
                        None => HoldingChange::Create {
                            card_id: order.card_id.clone(),
                            quantity: order.quantity,
                            price: order.price,
                        },
                    };
                    (cash_balance - amount, change)
                }
                OrderSide::Sell => {
                    // Presence and sufficiency were checked above.
                    let h = holding.expect("sell plan requires a holding");
                    let remaining = h.quantity - order.quantity;
                    let change = if remaining == 0 {
                        HoldingChange::Remove {
                            holding_id: h.id.clone(),
                        }
                    } else {
                        HoldingChange::Reduce {
                            holding_id: h.id.clone(),
                            quantity_after: remaining,
                            price: order.price,
                        }
                    };
                    (cash_balance + amount, change)
                }
            };

            Ok(SettlementPlan {
                status: OrderStatus::Filled,
                cash_after: Some(cash_after),
                holding_change: Some(holding_change),
                ledger_amount: Some(amount),
            })
        }
    }
}

/// Validates a cancellation and plans the refund.
///
/// Ownership (the order belongs to the cancelling account's portfolio) is
/// checked by the caller; this function owns the state-machine rule and the
/// refund arithmetic. BUY orders reserved `price * quantity` at creation,
/// so cancelling one returns exactly that; SELL cancellations change no
/// balances since holdings are never reserved for an OPEN order.
pub fn plan_cancellation(order: &Order, cash_balance: Decimal) -> Result<CancellationPlan> {
    if order.status != OrderStatus::Open {
        return Err(OrderError::InvalidState {
            order_id: order.id.clone(),
            status: order.status,
        }
        .into());
    }

    Ok(CancellationPlan {
        cash_after: match order.side {
            OrderSide::Buy => Some(cash_balance + order.amount()),
            OrderSide::Sell => None,
        },
    })
}
