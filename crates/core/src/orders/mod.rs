//! Orders module - order lifecycle and the settlement planner.

mod orders_errors;
mod orders_model;
mod orders_service;
mod orders_traits;
mod settlement;

#[cfg(test)]
mod orders_service_tests;
#[cfg(test)]
mod settlement_tests;

pub use orders_errors::OrderError;
pub use orders_model::{NewOrder, Order, OrderFill, OrderSide, OrderStatus, OrderType};
pub use orders_service::OrderService;
pub use orders_traits::{OrderRepositoryTrait, OrderServiceTrait};
pub use settlement::{
    plan_cancellation, plan_settlement, CancellationPlan, HoldingChange, SettlementPlan,
};
