use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use poketrade_core::ledger::LedgerEntry;

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountQuery {
    account_id: String,
}

async fn list_ledger(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AccountQuery>,
) -> ApiResult<Json<Vec<LedgerEntry>>> {
    let entries = state.ledger_service.get_ledger(&query.account_id)?;
    Ok(Json(entries))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/ledger", get(list_ledger))
}
