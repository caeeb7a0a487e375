//! API error mapping.
//!
//! Converts core errors into HTTP responses. Precondition failures come
//! back as 400 with their descriptive message; missing records as 404;
//! ownership violations as 403. Anything else is logged and surfaced as a
//! generic 500 so internal detail never leaks to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use poketrade_core::errors::{DatabaseError, Error};
use poketrade_core::orders::OrderError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

fn status_and_message(err: &Error) -> (StatusCode, String) {
    match err {
        Error::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        Error::Portfolio(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        Error::Order(OrderError::HoldingNotFound(_)) => (StatusCode::NOT_FOUND, err.to_string()),
        Error::Order(OrderError::Unauthorized(_)) => (StatusCode::FORBIDDEN, err.to_string()),
        Error::Order(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        Error::Database(DatabaseError::NotFound(_)) => (StatusCode::NOT_FOUND, err.to_string()),
        _ => {
            tracing::error!("Internal error: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = status_and_message(&self.0);
        (status, Json(json!({ "error": message }))).into_response()
    }
}
