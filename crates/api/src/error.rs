use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use soiree_core::error::CoreError;

use crate::response::ErrorResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the consistent
/// `{ "success": false, ... }` JSON envelope.
///
/// Generation failures never appear here: handlers convert them into a
/// degraded 200 with a fallback payload instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `soiree_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The route exists but does not support the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// An unexpected internal error. `message` is the endpoint's stable
    /// public message; `detail` is the underlying diagnostic.
    #[error("{message}: {detail}")]
    Internal {
        message: &'static str,
        detail: String,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::MissingParameter { .. } => {
                    (StatusCode::BAD_REQUEST, ErrorResponse::new(core.to_string()))
                }
                // Normalization failures are handled by the fallback path
                // before they can reach HTTP; any that leak are internal.
                CoreError::UnexpectedShape(detail) => {
                    tracing::error!(error = %detail, "Unhandled response-shape error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::with_detail("Internal server error", detail.clone()),
                    )
                }
            },

            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::new("Method not allowed"),
            ),

            AppError::Internal { message, detail } => {
                tracing::error!(error = %detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_detail(*message, detail.clone()),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
