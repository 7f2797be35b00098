//! Weather-mood adaptation: the sibling feature to the journey map.
//!
//! Same shape as [`crate::journey`]: validate the raw request, build a
//! prompt, normalize the model's response or fall back to a fixed set of
//! adjustments. Smaller surface -- the result is a flat list of mood
//! adjustments rather than a chronological arc.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::journey::{join_or, json_type_name, required_text};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of adjustments requested from the model and authored in the
/// fallback set.
pub const ADJUSTMENT_COUNT: usize = 4;

/// Venue type assumed when the request omits one.
pub const DEFAULT_VENUE_TYPE: &str = "indoor";

/// Persona sent as the system message on every adaptation call.
pub const SYSTEM_PROMPT: &str = "You are an expert event designer who adapts \
    event atmosphere to weather conditions. You respond only with valid JSON \
    matching the requested shape.";

/// Diagnostic recorded in `metadata.error` when the fallback set is served.
pub const FALLBACK_NOTE: &str = "AI generation failed, standard adaptations provided";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Raw, untrusted request body for the weather-mood endpoint.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherMoodRequest {
    pub event_type: Option<String>,
    pub weather_condition: Option<String>,
    pub venue_type: Option<String>,
    pub planned_activities: Option<Vec<String>>,
}

/// A validated weather-mood request with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub event_type: String,
    pub weather_condition: String,
    pub venue_type: String,
    pub planned_activities: Vec<String>,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One recommended change to the event atmosphere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodAdjustment {
    /// Which aspect of the event to adjust (lighting, music, ...).
    pub aspect: String,
    pub recommendation: String,
    pub reason: String,
}

/// Response metadata attached to every adaptation result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptationMetadata {
    pub event_type: String,
    pub weather_condition: String,
    pub venue_type: String,
    pub generated_at: DateTime<Utc>,
    /// Present only when the fallback set was served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The full adaptation result: metadata plus the adjustment list.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherAdaptation {
    pub metadata: AdaptationMetadata,
    pub adjustments: Vec<MoodAdjustment>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a raw request and apply defaults.
///
/// Required fields are checked sequentially: `eventType` then
/// `weatherCondition`, short-circuiting on the first failure.
pub fn validate_request(raw: &WeatherMoodRequest) -> Result<WeatherRequest, CoreError> {
    let event_type = required_text(raw.event_type.as_deref(), "eventType")?;
    let weather_condition = required_text(raw.weather_condition.as_deref(), "weatherCondition")?;

    let venue_type = raw
        .venue_type
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(DEFAULT_VENUE_TYPE)
        .to_string();

    Ok(WeatherRequest {
        event_type,
        weather_condition,
        venue_type,
        planned_activities: raw.planned_activities.clone().unwrap_or_default(),
    })
}

// ---------------------------------------------------------------------------
// Prompt building
// ---------------------------------------------------------------------------

/// Build the generation prompt for a validated request. Deterministic.
pub fn build_prompt(request: &WeatherRequest) -> String {
    format!(
        "Suggest how to adapt the mood of the following event to the \
         weather:\n\
         \n\
         Event type: {event_type}\n\
         Weather condition: {weather_condition}\n\
         Venue type: {venue_type}\n\
         Planned activities: {planned_activities}\n\
         \n\
         Provide exactly {count} adjustments.\n\
         Respond with a JSON object containing an \"adaptations\" array. \
         Each entry must be an object with the string fields \"aspect\", \
         \"recommendation\" and \"reason\".",
        event_type = request.event_type,
        weather_condition = request.weather_condition,
        venue_type = request.venue_type,
        planned_activities = join_or(&request.planned_activities, "None specified"),
        count = ADJUSTMENT_COUNT,
    )
}

// ---------------------------------------------------------------------------
// Response normalization
// ---------------------------------------------------------------------------

/// Reshape a decoded generation response into the adjustment list.
///
/// Accepts `{"adaptations": [...]}` or a bare top-level array; entry
/// fields are passed through permissively with missing or non-string
/// fields coerced to empty strings.
pub fn extract_adjustments(value: &Value) -> Result<Vec<MoodAdjustment>, CoreError> {
    let list = value.get("adaptations").unwrap_or(value);

    let items = list.as_array().ok_or_else(|| {
        CoreError::UnexpectedShape(format!(
            "expected an adaptations array, got {}",
            json_type_name(list)
        ))
    })?;

    Ok(items.iter().map(adjustment_from_value).collect())
}

fn adjustment_from_value(value: &Value) -> MoodAdjustment {
    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    MoodAdjustment {
        aspect: text("aspect"),
        recommendation: text("recommendation"),
        reason: text("reason"),
    }
}

// ---------------------------------------------------------------------------
// Fallback synthesis
// ---------------------------------------------------------------------------

/// The hand-authored adjustments served when generation fails.
///
/// Weather-independent on purpose: with no model output there is nothing
/// to tailor, so the set covers the aspects that help any event.
pub fn fallback_adjustments() -> Vec<MoodAdjustment> {
    vec![
        adjustment(
            "Lighting",
            "Use warm, adjustable lighting that can brighten a gloomy day or soften harsh sun.",
            "Lighting is the fastest lever on perceived atmosphere.",
        ),
        adjustment(
            "Music",
            "Prepare two playlists, one upbeat and one mellow, and switch by room energy.",
            "Music counteracts weather-driven energy dips.",
        ),
        adjustment(
            "Activities",
            "Keep one indoor alternative ready for every outdoor activity.",
            "A visible plan B keeps guests relaxed when conditions turn.",
        ),
        adjustment(
            "Comfort",
            "Stage blankets, fans, or covered walkways near entrances and transitions.",
            "Physical comfort sets the floor for every other impression.",
        ),
    ]
}

fn adjustment(aspect: &str, recommendation: &str, reason: &str) -> MoodAdjustment {
    MoodAdjustment {
        aspect: aspect.to_string(),
        recommendation: recommendation.to_string(),
        reason: reason.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
