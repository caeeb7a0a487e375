use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use poketrade_core::cards::{Card, NewCard};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_cards(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Card>>> {
    let cards = state.card_service.list_cards()?;
    Ok(Json(cards))
}

async fn get_card(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Card>> {
    let card = state.card_service.get_card(&id)?;
    Ok(Json(card))
}

async fn create_card(
    State(state): State<Arc<AppState>>,
    Json(new_card): Json<NewCard>,
) -> ApiResult<Json<Card>> {
    let card = state.card_service.create_card(new_card).await?;
    Ok(Json(card))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePriceRequest {
    price: Decimal,
}

/// Admin path: refresh a card's quoted reference price.
async fn update_card_price(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdatePriceRequest>,
) -> ApiResult<Json<Card>> {
    let card = state.card_service.update_card_price(id, request.price).await?;
    Ok(Json(card))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cards", get(list_cards).post(create_card))
        .route("/cards/{id}", get(get_card))
        .route("/cards/{id}/price", put(update_card_price))
}
