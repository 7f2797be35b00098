use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// AI features this deployment serves.
const FEATURES: &[&str] = &["emotional-journey", "weather-mood"];

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Available feature endpoints.
    pub features: &'static [&'static str],
}

/// GET /health -- liveness plus the available feature set.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        features: FEATURES,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
