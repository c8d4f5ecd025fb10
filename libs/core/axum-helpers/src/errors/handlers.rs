use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Fallback handler for unmatched routes.
pub async fn route_not_found() -> Response {
    let body = Json(ErrorResponse::new("Route not found"));
    (StatusCode::NOT_FOUND, body).into_response()
}
