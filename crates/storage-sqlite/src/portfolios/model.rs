//! Database model for portfolios.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poketrade_core::portfolios::Portfolio;
use poketrade_core::Result;

use crate::utils::{parse_decimal_column, parse_decimal_string_tolerant};

/// Database model for portfolios
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::portfolios)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioDB {
    pub id: String,
    pub account_id: String,
    pub cash_balance: String,
    pub total_value: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<PortfolioDB> for Portfolio {
    type Error = poketrade_core::Error;

    fn try_from(db: PortfolioDB) -> Result<Self> {
        Ok(Self {
            // The balance is invariant-bearing, so a corrupt value is an
            // error; the stored total is derived and recomputed on read.
            cash_balance: parse_decimal_column(&db.cash_balance, "portfolios.cash_balance")?,
            total_value: parse_decimal_string_tolerant(&db.total_value),
            id: db.id,
            account_id: db.account_id,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(cash_balance: &str) -> PortfolioDB {
        PortfolioDB {
            id: "p-1".to_string(),
            account_id: "acct-1".to_string(),
            cash_balance: cash_balance.to_string(),
            total_value: "0".to_string(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn valid_row_converts_with_its_balance() {
        let portfolio = Portfolio::try_from(row("123.45")).unwrap();
        assert_eq!(portfolio.cash_balance, dec!(123.45));
    }

    #[test]
    fn corrupt_cash_balance_fails_the_conversion() {
        assert!(Portfolio::try_from(row("not-a-number")).is_err());
        assert!(Portfolio::try_from(row("")).is_err());
    }
}
