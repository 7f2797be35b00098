//! Handler for the weather-mood adaptation endpoint.
//!
//! Routes:
//! - `POST /features/weather-mood` — adapt event mood to the weather

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use soiree_core::weather::{
    self, AdaptationMetadata, MoodAdjustment, WeatherAdaptation, WeatherMoodRequest,
    WeatherRequest,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Success envelope for the weather-mood endpoint.
#[derive(Debug, Serialize)]
pub struct WeatherMoodResponse {
    pub success: bool,
    pub adaptation: WeatherAdaptation,
}

/// POST /api/v1/features/weather-mood
///
/// Same soft-failure contract as the journey endpoint: one generation
/// attempt, and any failure degrades to the fixed adaptation set with
/// `metadata.error` recorded, still under a 200.
pub async fn adapt_weather_mood(
    State(state): State<AppState>,
    Json(raw): Json<WeatherMoodRequest>,
) -> AppResult<impl IntoResponse> {
    let request = weather::validate_request(&raw).map_err(AppError::Core)?;
    let prompt = weather::build_prompt(&request);

    let generated = state
        .generator
        .generate_json(weather::SYSTEM_PROMPT, &prompt)
        .await;

    let adaptation = match generated {
        Ok(value) => match weather::extract_adjustments(&value) {
            Ok(items) => compose(&request, items, None),
            Err(err) => fall_back(&request, err.to_string()),
        },
        Err(err) => fall_back(&request, err.to_string()),
    };

    Ok(Json(WeatherMoodResponse {
        success: true,
        adaptation,
    }))
}

/// Wrap an adjustment list into the response payload with fresh metadata.
fn compose(
    request: &WeatherRequest,
    items: Vec<MoodAdjustment>,
    error: Option<String>,
) -> WeatherAdaptation {
    WeatherAdaptation {
        metadata: AdaptationMetadata {
            event_type: request.event_type.clone(),
            weather_condition: request.weather_condition.clone(),
            venue_type: request.venue_type.clone(),
            generated_at: chrono::Utc::now(),
            error,
        },
        adjustments: items,
    }
}

/// Degraded path: log the failure and serve the fixed adaptation set.
fn fall_back(request: &WeatherRequest, reason: String) -> WeatherAdaptation {
    tracing::warn!(
        event_type = %request.event_type,
        weather = %request.weather_condition,
        reason = %reason,
        "Weather-mood generation failed, serving standard adaptations"
    );

    compose(
        request,
        weather::fallback_adjustments(),
        Some(weather::FALLBACK_NOTE.to_string()),
    )
}
