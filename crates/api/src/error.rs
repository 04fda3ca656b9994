use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use deedstore_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{ "error": ... }`
/// JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `deedstore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 400 with the raw backend message. This is an
///   internal/admin-facing API; a public deployment would map these to an
///   opaque code instead.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found".to_string()),
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::BAD_REQUEST, other.to_string())
        }
    }
}
