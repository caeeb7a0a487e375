use diesel::prelude::*;
use std::sync::Arc;

use poketrade_core::ledger::{LedgerEntry, LedgerRepositoryTrait};
use poketrade_core::Result;

use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::ledger_entries::dsl::*;

use super::model::LedgerEntryDB;

/// Read-side repository for the trade ledger. Entries are inserted by the
/// order repository inside the settlement transaction and never change
/// afterwards.
pub struct LedgerRepository {
    pool: Arc<DbPool>,
}

impl LedgerRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl LedgerRepositoryTrait for LedgerRepository {
    fn list_by_portfolio(&self, portfolio: &str) -> Result<Vec<LedgerEntry>> {
        let mut conn = get_connection(&self.pool)?;

        let results = ledger_entries
            .filter(portfolio_id.eq(portfolio))
            .select(LedgerEntryDB::as_select())
            .order(created_at.desc())
            .load::<LedgerEntryDB>(&mut conn)
            .into_core()?;

        results.into_iter().map(LedgerEntry::try_from).collect()
    }
}
