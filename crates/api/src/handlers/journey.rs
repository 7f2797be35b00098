//! Handler for the emotional-journey mapping endpoint.
//!
//! Routes:
//! - `POST /features/emotional-journey` — generate a journey map

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use soiree_core::journey::{
    self, JourneyMap, JourneyMapRequest, JourneyMetadata, JourneyRequest, JourneySegment,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Success envelope for the journey endpoint.
#[derive(Debug, Serialize)]
pub struct JourneyMapResponse {
    pub success: bool,
    #[serde(rename = "journeyMap")]
    pub journey_map: JourneyMap,
}

/// POST /api/v1/features/emotional-journey
///
/// Validates the request, derives the segment count from the event
/// duration, and makes a single generation attempt. Generation or
/// normalization failure is not an API error: the response degrades to
/// the canned fallback arc with `metadata.error` set, still under a 200.
pub async fn generate_journey_map(
    State(state): State<AppState>,
    Json(raw): Json<JourneyMapRequest>,
) -> AppResult<impl IntoResponse> {
    let request = journey::validate_request(&raw).map_err(AppError::Core)?;
    let segments = journey::segment_count(request.duration_hours);
    let prompt = journey::build_prompt(&request, segments);

    let generated = state
        .generator
        .generate_json(journey::SYSTEM_PROMPT, &prompt)
        .await;

    let journey_map = match generated {
        Ok(value) => match journey::extract_segments(&value) {
            Ok(items) => compose(&request, items, None),
            Err(err) => fall_back(&request, segments, err.to_string()),
        },
        Err(err) => fall_back(&request, segments, err.to_string()),
    };

    Ok(Json(JourneyMapResponse {
        success: true,
        journey_map,
    }))
}

/// Wrap a segment list into the response payload with fresh metadata.
fn compose(
    request: &JourneyRequest,
    items: Vec<JourneySegment>,
    error: Option<String>,
) -> JourneyMap {
    JourneyMap {
        metadata: JourneyMetadata {
            event_type: request.event_type.clone(),
            duration: request.duration_hours,
            audience_size: request.audience_size,
            generated_at: chrono::Utc::now(),
            error,
        },
        journey: items,
    }
}

/// Degraded path: log the failure and serve the fallback arc.
fn fall_back(request: &JourneyRequest, segments: u32, reason: String) -> JourneyMap {
    tracing::warn!(
        event_type = %request.event_type,
        reason = %reason,
        "Journey generation failed, serving fallback arc"
    );

    compose(
        request,
        journey::fallback_journey(segments),
        Some(journey::FALLBACK_NOTE.to_string()),
    )
}
