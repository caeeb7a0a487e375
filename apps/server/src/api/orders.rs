use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use poketrade_core::orders::{NewOrder, Order, OrderError, OrderStatus};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountQuery {
    account_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitOrderResponse {
    order_id: String,
    status: OrderStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ledger_entry_id: Option<String>,
}

async fn submit_order(
    State(state): State<Arc<AppState>>,
    Json(new_order): Json<NewOrder>,
) -> ApiResult<Json<SubmitOrderResponse>> {
    let fill = state.order_service.submit_order(new_order).await?;

    let message = match fill.order.status {
        OrderStatus::Filled => "Order filled".to_string(),
        _ => "Order accepted".to_string(),
    };

    Ok(Json(SubmitOrderResponse {
        order_id: fill.order.id,
        status: fill.order.status,
        message,
        ledger_entry_id: fill.ledger_entry.map(|e| e.id),
    }))
}

async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AccountQuery>,
) -> ApiResult<Json<Vec<Order>>> {
    let orders = state.order_service.get_orders(&query.account_id)?;
    Ok(Json(orders))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderActionRequest {
    order_id: String,
    account_id: String,
    action: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderActionResponse {
    order_id: String,
    status: OrderStatus,
    message: String,
}

async fn update_order(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OrderActionRequest>,
) -> ApiResult<Json<OrderActionResponse>> {
    if request.action != "cancel" {
        return Err(poketrade_core::Error::from(OrderError::UnsupportedAction(
            request.action,
        ))
        .into());
    }

    let order = state
        .order_service
        .cancel_order(&request.order_id, &request.account_id)
        .await?;

    Ok(Json(OrderActionResponse {
        order_id: order.id,
        status: order.status,
        message: "Order cancelled".to_string(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/orders",
        get(list_orders).post(submit_order).patch(update_order),
    )
}
