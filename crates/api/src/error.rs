use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use palette_picker_core::error::CoreError;
use serde_json::{json, Value};
use sqlx::postgres::PgDatabaseError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Every variant renders as `{ "error": ... }`: a message string for
/// request and lookup errors, and the store's own error fields for
/// database failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `palette_picker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// A request body that could not be read as JSON.
    #[error("{0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Core(core) => {
                let status = match core {
                    CoreError::MissingField { .. } | CoreError::InvalidField { .. } => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                };
                (status, Value::String(core.to_string()))
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, store_error_body(err))
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Value::String(msg.clone())),
        };

        (status, axum::Json(json!({ "error": error }))).into_response()
    }
}

/// Lay out a store failure the way the database reported it.
///
/// Errors raised by Postgres carry their SQLSTATE `code`, the violated
/// `constraint`, the `table`, and the server's `detail` line when present.
/// Any other failure (pool, I/O, decoding) only has a `message`.
fn store_error_body(err: &sqlx::Error) -> Value {
    match err {
        sqlx::Error::Database(db_err) => {
            let detail = db_err
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(PgDatabaseError::detail);
            json!({
                "message": db_err.message(),
                "code": db_err.code(),
                "constraint": db_err.constraint(),
                "table": db_err.table(),
                "detail": detail,
            })
        }
        other => json!({ "message": other.to_string() }),
    }
}
