//! Request handlers for the AI feature endpoints.
//!
//! Each submodule orchestrates one feature: validate the request with
//! `soiree_core`, call the generation client once, and wrap either the
//! normalized result or the fallback payload. Shared method-handling
//! helpers live here.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::error::AppError;

pub mod journey;
pub mod weather;

/// Handler for CORS preflight requests: 200 with an empty body. The
/// actual CORS headers are attached unconditionally by the router's
/// middleware stack.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Fallback for request methods a feature route does not support.
pub async fn method_not_allowed() -> impl IntoResponse {
    AppError::MethodNotAllowed
}
