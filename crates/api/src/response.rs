//! Shared response envelope types for API handlers.
//!
//! Failure responses use a `{ "success": false, "message": ... }` envelope
//! across every endpoint. Use [`ErrorResponse`] instead of ad-hoc
//! `serde_json::json!` so the shape stays consistent.

use serde::Serialize;

/// Standard failure envelope.
///
/// `success` is always `false`; `error` carries diagnostic detail and is
/// only present on 500-class responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Failure envelope with no diagnostic detail (4xx responses).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    /// Failure envelope carrying diagnostic detail (5xx responses).
    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(detail.into()),
        }
    }
}
