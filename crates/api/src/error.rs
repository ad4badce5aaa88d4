use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use acrely_core::CoreError;
use acrely_notify::{DispatchError, EnrichmentError};

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain errors and implements [`IntoResponse`] to produce
/// consistent `{ "error", "code" }` JSON error responses. Send failures
/// never appear here: they ride inside a successful dispatch result.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `acrely_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A dispatch failure (validation or mandatory enrichment).
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

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
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Dispatch(dispatch) => match dispatch {
                DispatchError::Core(core) => classify_core_error(core),
                DispatchError::Enrichment(e) => classify_enrichment_error(e),
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::Validation(msg) => {
            (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Enrichment failures map to 500 regardless of not-found vs backend: the
/// webhook producer cannot act on the distinction, and the subject record
/// being missing is an internal data problem, not a caller mistake. The
/// detail is logged, the body names only the entity.
fn classify_enrichment_error(err: &EnrichmentError) -> (StatusCode, &'static str, String) {
    let entity = match err {
        EnrichmentError::NotFound { entity, .. } => entity,
        EnrichmentError::Backend { entity, .. } => entity,
    };
    tracing::error!(error = %err, "Enrichment failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "ENRICHMENT_ERROR",
        format!("Failed to fetch {entity}"),
    )
}
