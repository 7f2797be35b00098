//! Route definitions for the AI feature endpoints.
//!
//! ```text
//! POST    /emotional-journey    generate_journey_map
//! POST    /weather-mood         adapt_weather_mood
//! OPTIONS /...                  preflight (200, empty body)
//! other   /...                  405 Method not allowed
//! ```
//!
//! Preflight and the 405 fallback are wired per-route so the envelope
//! matches the feature endpoints' `{success: false, message}` contract
//! instead of axum's bare default.

use axum::routing::post;
use axum::Router;

use crate::handlers::{self, journey, weather};
use crate::state::AppState;

/// Routes nested under `/api/v1/features`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/emotional-journey",
            post(journey::generate_journey_map)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/weather-mood",
            post(weather::adapt_weather_mood)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
}
