use diesel::prelude::*;
use std::sync::Arc;

use poketrade_core::holdings::{Holding, HoldingRepositoryTrait};
use poketrade_core::Result;

use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::holdings::dsl::*;

use super::model::HoldingDB;

/// Read-side repository for holdings. All holding mutations happen inside
/// the order settlement transaction owned by the order repository.
pub struct HoldingRepository {
    pool: Arc<DbPool>,
}

impl HoldingRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

/// Finds the holding a portfolio has for one card, inside the caller's
/// transaction. Used by the order repository when planning a settlement.
pub(crate) fn find_by_card_tx(
    conn: &mut SqliteConnection,
    portfolio: &str,
    card: &str,
) -> Result<Option<Holding>> {
    let row = holdings
        .filter(portfolio_id.eq(portfolio))
        .filter(card_id.eq(card))
        .select(HoldingDB::as_select())
        .first::<HoldingDB>(conn)
        .optional()
        .into_core()?;

    Ok(row.map(Holding::from))
}

impl HoldingRepositoryTrait for HoldingRepository {
    fn list_by_portfolio(&self, portfolio: &str) -> Result<Vec<Holding>> {
        let mut conn = get_connection(&self.pool)?;

        let results = holdings
            .filter(portfolio_id.eq(portfolio))
            .select(HoldingDB::as_select())
            .order(card_id.asc())
            .load::<HoldingDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Holding::from).collect())
    }

    fn find_by_card(&self, portfolio: &str, card: &str) -> Result<Option<Holding>> {
        let mut conn = get_connection(&self.pool)?;
        find_by_card_tx(&mut conn, portfolio, card)
    }
}
