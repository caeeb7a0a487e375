use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use poketrade_core::portfolios::{CashAdjustment, Portfolio, PortfolioSummary};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountQuery {
    account_id: String,
}

/// Returns the portfolio with its holdings, creating it on first access.
async fn get_portfolio(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AccountQuery>,
) -> ApiResult<Json<PortfolioSummary>> {
    let summary = state
        .portfolio_service
        .get_portfolio(&query.account_id)
        .await?;
    Ok(Json(summary))
}

async fn adjust_cash(
    State(state): State<Arc<AppState>>,
    Json(adjustment): Json<CashAdjustment>,
) -> ApiResult<Json<Portfolio>> {
    let portfolio = state.portfolio_service.adjust_cash(adjustment).await?;
    Ok(Json(portfolio))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio", get(get_portfolio).patch(adjust_cash))
}
