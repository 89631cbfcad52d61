//! HTTP error type for handlers and its `{error, code}` JSON rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use budget_core::error::CoreError;
use serde_json::json;

/// PostgreSQL SQLSTATE codes with a client-facing mapping.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

/// Error returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain failure from `budget_core` or a model `check()`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Repository failure from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

/// What the client sees for one failure.
struct ErrorBody {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ErrorBody {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// A 500 whose message never carries the underlying detail.
    fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An internal error occurred",
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Core(err) => from_core(err),
            AppError::Database(err) => from_sqlx(err),
        };

        (
            body.status,
            Json(json!({
                "error": body.message,
                "code": body.code,
            })),
        )
            .into_response()
    }
}

fn from_core(err: &CoreError) -> ErrorBody {
    match err {
        CoreError::NotFound { entity, id } => ErrorBody::new(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::DanglingReference { .. } => {
            tracing::warn!(error = %err, "Dangling reference blocked computation");
            ErrorBody::new(StatusCode::CONFLICT, "DANGLING_REFERENCE", err.to_string())
        }
        CoreError::Validation(msg) => {
            ErrorBody::new(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.as_str())
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            ErrorBody::internal()
        }
    }
}

/// Constraint violations the schema enforces become client errors. Anything
/// else is logged and hidden behind a 500.
fn from_sqlx(err: &sqlx::Error) -> ErrorBody {
    if let sqlx::Error::RowNotFound = err {
        return ErrorBody::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found");
    }

    if let Some(db_err) = err.as_database_error() {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) if constraint.starts_with("uq_") => {
                return ErrorBody::new(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return ErrorBody::new(
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Referenced record missing or still in use: {constraint}"),
                );
            }
            Some(CHECK_VIOLATION) => {
                return ErrorBody::new(
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Value violates constraint: {constraint}"),
                );
            }
            _ => {}
        }
    }

    tracing::error!(error = %err, "Database error");
    ErrorBody::internal()
}
