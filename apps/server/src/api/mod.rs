//! HTTP routers, one module per resource.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

mod cards;
mod health;
mod ledger;
mod orders;
mod portfolio;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(orders::router())
        .merge(portfolio::router())
        .merge(cards::router())
        .merge(ledger::router())
        .merge(health::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
