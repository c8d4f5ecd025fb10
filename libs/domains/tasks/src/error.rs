use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Unknown identifier. Unparseable ids are reported the same way, so the
    /// wire message never varies.
    #[error("Task not found.")]
    NotFound,

    #[error("{0}")]
    Validation(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

impl From<ValidationErrors> for TaskError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Request validation failed".to_string());
        TaskError::Validation(message)
    }
}

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound => AppError::NotFound(err.to_string()),
            TaskError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
