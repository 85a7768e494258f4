use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pagesort_core::{ConfigError, ValidationFailure};
use serde_json::{json, Value};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`ValidationFailure`] for rejected list parameters and adds
/// HTTP-specific variants. Implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// List parameters broke a rule of the endpoint's constraints.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// A constraint spec failed its registration check.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(failure) => (StatusCode::BAD_REQUEST, validation_body(failure)),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
            AppError::Config(err) => {
                tracing::error!(error = %err, "List constraints misconfigured");
                internal_body()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_body()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// `{ "error", "code", "kind", "field"?, "value"? }` for a rejected request.
fn validation_body(failure: &ValidationFailure) -> Value {
    let mut body = json!({
        "error": failure.message(),
        "code": "VALIDATION_ERROR",
        "kind": failure.kind().code(),
    });
    if let Some(field) = failure.field() {
        body["field"] = json!(field);
    }
    if let Some(value) = failure.value() {
        body["value"] = json!(value);
    }
    body
}

fn internal_body() -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "An internal error occurred",
            "code": "INTERNAL_ERROR",
        }),
    )
}
