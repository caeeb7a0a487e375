use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use poketrade_core::ledger::LedgerEntry;
use poketrade_core::orders::{
    plan_cancellation, plan_settlement, HoldingChange, NewOrder, Order, OrderError, OrderFill,
    OrderRepositoryTrait, OrderStatus,
};
use poketrade_core::Result;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::holdings::{find_by_card_tx, HoldingDB};
use crate::ledger::LedgerEntryDB;
use crate::portfolios::{find_by_account, set_cash_balance};
use crate::schema::{holdings, ledger_entries, orders};
use crate::utils::parse_decimal_column;

use super::model::OrderDB;

/// Repository for order submission, cancellation and reads.
///
/// Submission and cancellation each run as one job on the writer actor:
/// portfolio and holding state is re-read inside the transaction, the
/// settlement planner decides the mutations, and cash, holding, order and
/// ledger writes commit together or not at all.
pub struct OrderRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl OrderRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

fn apply_holding_change(
    conn: &mut SqliteConnection,
    portfolio_id: &str,
    change: &HoldingChange,
) -> Result<()> {
    let now = chrono::Utc::now().naive_utc();

    match change {
        HoldingChange::Create {
            card_id,
            quantity,
            price,
        } => {
            let holding_db = HoldingDB {
                id: uuid::Uuid::new_v4().to_string(),
                portfolio_id: portfolio_id.to_string(),
                card_id: card_id.clone(),
                quantity: *quantity,
                average_cost: price.to_string(),
                current_price: price.to_string(),
                created_at: now,
                updated_at: now,
            };
            diesel::insert_into(holdings::table)
                .values(&holding_db)
                .execute(conn)
                .into_core()?;
        }
        HoldingChange::Increase {
            holding_id,
            quantity_after,
            price,
        }
        | HoldingChange::Reduce {
            holding_id,
            quantity_after,
            price,
        } => {
            diesel::update(holdings::table.find(holding_id))
                .set((
                    holdings::quantity.eq(quantity_after),
                    holdings::current_price.eq(price.to_string()),
                    holdings::updated_at.eq(now),
                ))
                .execute(conn)
                .into_core()?;
        }
        HoldingChange::Remove { holding_id } => {
            diesel::delete(holdings::table.find(holding_id))
                .execute(conn)
                .into_core()?;
        }
    }

    Ok(())
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn submit(&self, new_order: NewOrder) -> Result<OrderFill> {
        self.writer
            .exec(move |conn| {
                let portfolio = find_by_account(conn, &new_order.account_id)?;
                let cash =
                    parse_decimal_column(&portfolio.cash_balance, "portfolios.cash_balance")?;
                let holding = find_by_card_tx(conn, &portfolio.id, &new_order.card_id)?;

                let plan = plan_settlement(&new_order, cash, holding.as_ref())?;

                let order_db = OrderDB::from_new(&new_order, &portfolio.id, plan.status);
                diesel::insert_into(orders::table)
                    .values(&order_db)
                    .execute(conn)
                    .into_core()?;

                if let Some(cash_after) = plan.cash_after {
                    set_cash_balance(conn, &portfolio.id, cash_after)?;
                }

                if let Some(change) = &plan.holding_change {
                    apply_holding_change(conn, &portfolio.id, change)?;
                }

                let ledger_entry = match plan.ledger_amount {
                    Some(amount) => {
                        let entry_db = LedgerEntryDB {
                            id: uuid::Uuid::new_v4().to_string(),
                            order_id: order_db.id.clone(),
                            portfolio_id: portfolio.id.clone(),
                            card_id: new_order.card_id.clone(),
                            side: new_order.side.as_str().to_string(),
                            quantity: new_order.quantity,
                            price: new_order.price.to_string(),
                            amount: amount.to_string(),
                            description: format!(
                                "{} {} {} @ {}",
                                new_order.side.as_str(),
                                new_order.quantity,
                                new_order.card_id,
                                new_order.price
                            ),
                            created_at: chrono::Utc::now().naive_utc(),
                        };
                        diesel::insert_into(ledger_entries::table)
                            .values(&entry_db)
                            .execute(conn)
                            .into_core()?;
                        Some(LedgerEntry::try_from(entry_db)?)
                    }
                    None => None,
                };

                Ok(OrderFill {
                    order: order_db.try_into()?,
                    ledger_entry,
                })
            })
            .await
    }

    async fn cancel(&self, order_id: String, account_id: String) -> Result<Order> {
        self.writer
            .exec(move |conn| {
                let order_db = orders::table
                    .find(&order_id)
                    .select(OrderDB::as_select())
                    .first::<OrderDB>(conn)
                    .into_core()?;

                let portfolio = find_by_account(conn, &account_id)?;
                if order_db.portfolio_id != portfolio.id {
                    return Err(OrderError::Unauthorized(order_id).into());
                }

                let order: Order = order_db.try_into()?;
                let cash =
                    parse_decimal_column(&portfolio.cash_balance, "portfolios.cash_balance")?;
                let plan = plan_cancellation(&order, cash)?;

                diesel::update(orders::table.find(&order.id))
                    .set(orders::status.eq(OrderStatus::Cancelled.as_str()))
                    .execute(conn)
                    .into_core()?;

                if let Some(cash_after) = plan.cash_after {
                    set_cash_balance(conn, &portfolio.id, cash_after)?;
                }

                Ok(Order {
                    status: OrderStatus::Cancelled,
                    ..order
                })
            })
            .await
    }

    fn get_by_id(&self, order_id: &str) -> Result<Order> {
        let mut conn = get_connection(&self.pool)?;

        let order_db = orders::table
            .find(order_id)
            .select(OrderDB::as_select())
            .first::<OrderDB>(&mut conn)
            .into_core()?;

        order_db.try_into()
    }

    fn list_by_account(&self, account_id: &str) -> Result<Vec<Order>> {
        let mut conn = get_connection(&self.pool)?;

        let portfolio = find_by_account(&mut conn, account_id)?;

        let results = orders::table
            .filter(orders::portfolio_id.eq(&portfolio.id))
            .select(OrderDB::as_select())
            .order(orders::created_at.desc())
            .load::<OrderDB>(&mut conn)
            .into_core()?;

        results.into_iter().map(Order::try_from).collect()
    }
}
