use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use scribe_core::error::{codes, CoreError};
use scribe_db::error::DbError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain errors from `scribe-core`/`scribe-db` and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce JSON
/// error responses carrying the stable numeric codes clients map on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `scribe-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The caller is not allowed to see or touch the resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Core(core) => AppError::Core(core),
            DbError::Persistence(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => {
                let status = match core {
                    CoreError::Validation { .. } => StatusCode::BAD_REQUEST,
                    CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                };
                (status, core.code(), core.to_string())
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    codes::PERSISTENCE,
                    "A persistence error occurred".to_string(),
                )
            }

            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, 403, msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
