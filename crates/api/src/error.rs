use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tasklist_core::error::CoreError;
use tasklist_db::ServiceError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tasklist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body that could not be read or parsed as JSON.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(core) => AppError::Core(core),
            ServiceError::Database(db) => AppError::Database(db),
        }
    }
}

impl From<JsonRejection> for AppError {
    /// Well-formed JSON that does not fit the expected shape (missing `text`,
    /// `completed: 7`) is a validation failure; anything else is a malformed
    /// request. The serde detail is logged, not returned.
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        match rejection {
            JsonRejection::JsonDataError(_) => AppError::Core(CoreError::Validation(
                "Request body has missing or invalid fields".to_string(),
            )),
            JsonRejection::JsonSyntaxError(_) => {
                AppError::BadRequest("Request body is not valid JSON".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => {
                AppError::BadRequest("Expected an application/json request body".to_string())
            }
            _ => AppError::BadRequest("Could not read request body".to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::DuplicateName { name } => (
                    StatusCode::CONFLICT,
                    "DUPLICATE_NAME",
                    format!("Category names must be unique: '{name}' already exists"),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Storage faults ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::BAD_REQUEST,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "message": "error",
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
