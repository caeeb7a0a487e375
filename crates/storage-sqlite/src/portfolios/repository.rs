use async_trait::async_trait;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use poketrade_core::portfolios::{
    CashAdjustment, CashOperation, Portfolio, PortfolioError, PortfolioRepositoryTrait,
};
use poketrade_core::Result;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::portfolios;
use crate::schema::portfolios::dsl::*;

use super::model::PortfolioDB;

/// Repository for managing portfolio rows in the database.
///
/// Cash mutations run on the writer actor so a concurrent adjustment and
/// order settlement can never interleave their read-check-write sequences.
pub struct PortfolioRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PortfolioRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

/// Loads a portfolio row by its external account id. Shared with the order
/// repository, which re-reads portfolio state inside its own transaction.
pub(crate) fn find_by_account(
    conn: &mut SqliteConnection,
    account: &str,
) -> Result<PortfolioDB> {
    portfolios
        .filter(account_id.eq(account))
        .select(PortfolioDB::as_select())
        .first::<PortfolioDB>(conn)
        .into_core()
}

/// Updates a portfolio's cash balance inside the caller's transaction.
pub(crate) fn set_cash_balance(
    conn: &mut SqliteConnection,
    portfolio_id: &str,
    balance: Decimal,
) -> Result<()> {
    diesel::update(portfolios.find(portfolio_id))
        .set((
            cash_balance.eq(balance.to_string()),
            updated_at.eq(chrono::Utc::now().naive_utc()),
        ))
        .execute(conn)
        .into_core()?;
    Ok(())
}

#[async_trait]
impl PortfolioRepositoryTrait for PortfolioRepository {
    fn get_by_account(&self, account: &str) -> Result<Portfolio> {
        let mut conn = get_connection(&self.pool)?;
        find_by_account(&mut conn, account)?.try_into()
    }

    async fn get_or_create(&self, account: &str, starting_cash: Decimal) -> Result<Portfolio> {
        let account = account.to_string();
        self.writer
            .exec(move |conn| {
                let existing = portfolios
                    .filter(account_id.eq(&account))
                    .select(PortfolioDB::as_select())
                    .first::<PortfolioDB>(conn)
                    .optional()
                    .into_core()?;

                if let Some(found) = existing {
                    return found.try_into();
                }

                let now = chrono::Utc::now().naive_utc();
                let portfolio_db = PortfolioDB {
                    id: uuid::Uuid::new_v4().to_string(),
                    account_id: account,
                    cash_balance: starting_cash.to_string(),
                    total_value: Decimal::ZERO.to_string(),
                    created_at: now,
                    updated_at: now,
                };

                diesel::insert_into(portfolios::table)
                    .values(&portfolio_db)
                    .execute(conn)
                    .into_core()?;

                portfolio_db.try_into()
            })
            .await
    }

    async fn adjust_cash(&self, adjustment: CashAdjustment) -> Result<Portfolio> {
        self.writer
            .exec(move |conn| {
                let current = find_by_account(conn, &adjustment.account_id)?;
                let balance = crate::utils::parse_decimal_column(
                    &current.cash_balance,
                    "portfolios.cash_balance",
                )?;

                let new_balance = match adjustment.operation {
                    CashOperation::Add => balance + adjustment.amount,
                    CashOperation::Subtract => {
                        if balance < adjustment.amount {
                            return Err(PortfolioError::InsufficientFunds {
                                required: adjustment.amount,
                                available: balance,
                            }
                            .into());
                        }
                        balance - adjustment.amount
                    }
                    CashOperation::Set => adjustment.amount,
                };

                set_cash_balance(conn, &current.id, new_balance)?;

                let updated = portfolios
                    .find(&current.id)
                    .select(PortfolioDB::as_select())
                    .first::<PortfolioDB>(conn)
                    .into_core()?;

                updated.try_into()
            })
            .await
    }

    async fn save_total_value(&self, portfolio_id: String, total: Decimal) -> Result<()> {
        self.writer
            .exec(move |conn| {
                diesel::update(portfolios.find(&portfolio_id))
                    .set((
                        total_value.eq(total.to_string()),
                        updated_at.eq(chrono::Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .into_core()?;
                Ok(())
            })
            .await
    }
}
