//! Application-level error type and its wire-format classification.
//!
//! Every failure leaving the process goes through exactly one of three
//! branches, in priority order:
//!
//! 1. A deliberately raised application error ([`CoreError`] or
//!    [`AppError::BadRequest`]) keeps its declared status and message.
//! 2. A store-level uniqueness violation ([`DbError::UniqueViolation`])
//!    becomes a 409 with the driver message preserved in `detail`.
//! 3. Anything else becomes a sanitized 500; the original failure is logged
//!    and never reaches the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use bookshelf_core::error::CoreError;
use bookshelf_db::DbError;

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bookshelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A classified database error from `bookshelf_db`.
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Wire-format error envelope.
///
/// `path` is filled in by the envelope middleware; everything else is fixed
/// at classification time. `detail` appears only on classifier-level
/// uniqueness conflicts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub timestamp: String,
    pub path: String,
    pub message: String,
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Current time as an ISO-8601 / RFC 3339 string with millisecond precision.
pub(crate) fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, detail) = match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity } => (
                    StatusCode::NOT_FOUND,
                    "NotFound",
                    format!("{entity} not found"),
                    None,
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "BadRequest", msg, None),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", msg, None),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "InternalServerError",
                        "Internal server error".to_string(),
                        None,
                    )
                }
            },

            AppError::Db(DbError::UniqueViolation(detail)) => (
                StatusCode::CONFLICT,
                "Conflict",
                "Conflict: unique constraint violation".to_string(),
                Some(detail),
            ),
            AppError::Db(DbError::Other(err)) => {
                tracing::error!(error = %err, "Unhandled database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "Internal server error".to_string(),
                    None,
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BadRequest", msg, None),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalServerError",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            timestamp: iso_timestamp(),
            path: String::new(),
            message,
            error,
            detail,
        };

        // The envelope middleware pulls the body back out of the extensions
        // to fill in the request path.
        let mut response = (status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}
