pub mod features;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /features/emotional-journey    POST generate, OPTIONS preflight
/// /features/weather-mood         POST adapt, OPTIONS preflight
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/features", features::router())
}
