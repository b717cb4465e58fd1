use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use notes_core::error::CoreError;
use serde_json::json;

/// Application-level error type for the note handlers.
///
/// Each variant is the failure of one operation and carries the store error
/// that caused it. The response only ever exposes the variant's fixed
/// message; the cause goes to the log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to create note")]
    CreateFailed(#[source] CoreError),

    #[error("Failed to fetch notes")]
    FetchFailed(#[source] CoreError),

    /// Missing rows and store failures both land here.
    #[error("Note not found or failed to update")]
    UpdateFailed(#[source] CoreError),

    /// Missing rows and store failures both land here.
    #[error("Note not found or failed to delete")]
    DeleteFailed(#[source] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::CreateFailed(_) | AppError::FetchFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::UpdateFailed(_) | AppError::DeleteFailed(_) => StatusCode::NOT_FOUND,
        }
    }

    fn cause(&self) -> &CoreError {
        match self {
            AppError::CreateFailed(cause)
            | AppError::FetchFailed(cause)
            | AppError::UpdateFailed(cause)
            | AppError::DeleteFailed(cause) => cause,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self.cause() {
            CoreError::NotFound { entity, id } => {
                tracing::debug!(entity = *entity, id = %id, "{}", self);
            }
            cause => {
                tracing::error!(error = %cause, "{}", self);
            }
        }

        let body = json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
