//! JSON extractor whose rejections use the standard error body.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor with standardized rejections.
///
/// Behaves like [`axum::Json`], except that malformed or mistyped bodies are
/// rejected with status 400 and an `{ "error": <message> }` body instead of
/// axum's plain-text 422.
///
/// # Example
/// ```ignore
/// use axum_helpers::AppJson;
///
/// async fn create_task(AppJson(payload): AppJson<CreateTask>) { /* ... */ }
/// ```
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(AppJson(data))
    }
}
