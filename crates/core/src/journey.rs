//! Emotional-journey mapping: types, validation, planning, prompts,
//! normalization, and the canned fallback arc.
//!
//! The api crate sequences these pieces: validate the raw request, derive
//! the segment count from the event duration, build the generation prompt,
//! then either normalize the model's response or synthesize the fallback
//! journey when generation fails.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Planning constants
// ---------------------------------------------------------------------------

/// Hours of event time covered by one journey segment.
pub const SEGMENT_GRANULARITY_HOURS: f64 = 0.5;
/// Floor so short events still get a minimum-viable five-phase arc.
pub const MIN_SEGMENTS: u32 = 5;
/// Ceiling so the prompt and result stay bounded for very long events.
pub const MAX_SEGMENTS: u32 = 10;

/// Audience description used when the request omits one.
pub const DEFAULT_AUDIENCE_DETAILS: &str = "General audience";

/// Persona sent as the system message on every journey generation call.
pub const SYSTEM_PROMPT: &str = "You are an expert event designer who maps the \
    emotional arc of live events. You respond only with valid JSON matching \
    the requested shape.";

/// Diagnostic recorded in `metadata.error` when the fallback arc is served.
pub const FALLBACK_NOTE: &str = "AI generation failed, fallback journey provided";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Raw, untrusted request body for the emotional-journey endpoint.
///
/// Every field is optional at the serde layer so that missing fields are
/// reported by [`validate_request`] with the contractual message rather
/// than failing deserialization.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JourneyMapRequest {
    pub event_type: Option<String>,
    /// Total event duration in hours (wire name `eventDuration`).
    pub event_duration: Option<f64>,
    pub audience_size: Option<f64>,
    pub audience_details: Option<String>,
    pub event_goals: Option<String>,
    pub key_moments: Option<Vec<String>>,
    pub desired_emotions: Option<Vec<String>>,
}

/// A validated journey request with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyRequest {
    pub event_type: String,
    pub duration_hours: f64,
    pub audience_size: f64,
    pub audience_details: String,
    pub event_goals: String,
    pub key_moments: Vec<String>,
    pub desired_emotions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One labeled phase of an event's emotional arc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneySegment {
    /// Human-readable label of when in the event this occurs.
    pub timepoint: String,
    /// Primary target emotion for the phase.
    pub emotion: String,
    pub description: String,
    /// Concrete sensory/activity elements supporting the emotion.
    pub elements: String,
    /// How to move guests into the next segment.
    pub transitions: String,
}

/// Response metadata attached to every journey result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyMetadata {
    pub event_type: String,
    /// Event duration in hours, echoed from the request.
    pub duration: f64,
    pub audience_size: f64,
    pub generated_at: DateTime<Utc>,
    /// Present only when the fallback arc was served.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The full journey result: metadata plus the chronological segment list.
#[derive(Debug, Clone, Serialize)]
pub struct JourneyMap {
    pub metadata: JourneyMetadata,
    pub journey: Vec<JourneySegment>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a raw request and apply defaults.
///
/// Required fields are checked sequentially in the fixed order `eventType`
/// -> `eventDuration` -> `audienceSize` -> `eventGoals`, short-circuiting
/// on the first failure so a request missing several fields is reported
/// against the earliest one.
pub fn validate_request(raw: &JourneyMapRequest) -> Result<JourneyRequest, CoreError> {
    let event_type = required_text(raw.event_type.as_deref(), "eventType")?;
    let duration_hours = required_number(raw.event_duration, "eventDuration")?;
    let audience_size = required_number(raw.audience_size, "audienceSize")?;
    let event_goals = required_text(raw.event_goals.as_deref(), "eventGoals")?;

    let audience_details = raw
        .audience_details
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DEFAULT_AUDIENCE_DETAILS)
        .to_string();

    Ok(JourneyRequest {
        event_type,
        duration_hours,
        audience_size,
        audience_details,
        event_goals,
        key_moments: raw.key_moments.clone().unwrap_or_default(),
        desired_emotions: raw.desired_emotions.clone().unwrap_or_default(),
    })
}

/// A required string field: present and non-blank.
pub(crate) fn required_text(value: Option<&str>, field: &'static str) -> Result<String, CoreError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
        _ => Err(CoreError::MissingParameter { field }),
    }
}

/// A required numeric field: present and strictly positive.
pub(crate) fn required_number(value: Option<f64>, field: &'static str) -> Result<f64, CoreError> {
    match value {
        Some(n) if n > 0.0 => Ok(n),
        _ => Err(CoreError::MissingParameter { field }),
    }
}

// ---------------------------------------------------------------------------
// Segment planning
// ---------------------------------------------------------------------------

/// Number of journey segments for an event of the given duration.
///
/// One segment per half hour, rounded up so fractional durations never
/// lose a segment, clamped to [[`MIN_SEGMENTS`], [`MAX_SEGMENTS`]].
pub fn segment_count(duration_hours: f64) -> u32 {
    let raw = (duration_hours / SEGMENT_GRANULARITY_HOURS).ceil() as u32;
    raw.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

// ---------------------------------------------------------------------------
// Prompt building
// ---------------------------------------------------------------------------

/// Build the generation prompt for a validated request.
///
/// Deterministic: the same request and segment count always produce the
/// same prompt. The required output shape is spelled out so the
/// normalizer has a stable contract to parse against.
pub fn build_prompt(request: &JourneyRequest, segments: u32) -> String {
    format!(
        "Create an emotional journey map for the following event:\n\
         \n\
         Event type: {event_type}\n\
         Duration: {duration} hours\n\
         Audience size: {audience_size}\n\
         Audience details: {audience_details}\n\
         Event goals: {event_goals}\n\
         Key moments: {key_moments}\n\
         Desired emotions: {desired_emotions}\n\
         \n\
         Divide the event into exactly {segments} chronological segments \
         covering the full duration.\n\
         Respond with a JSON object containing a \"journey\" array. Each \
         entry must be an object with the string fields \"timepoint\", \
         \"emotion\", \"description\", \"elements\" and \"transitions\".",
        event_type = request.event_type,
        duration = request.duration_hours,
        audience_size = request.audience_size,
        audience_details = request.audience_details,
        event_goals = request.event_goals,
        key_moments = join_or(&request.key_moments, "None specified"),
        desired_emotions = join_or(&request.desired_emotions, "Not specified"),
        segments = segments,
    )
}

/// Join a list for prompt display, or use `fallback` when it is empty.
pub(crate) fn join_or(list: &[String], fallback: &str) -> String {
    if list.is_empty() {
        fallback.to_string()
    } else {
        list.join(", ")
    }
}

// ---------------------------------------------------------------------------
// Response normalization
// ---------------------------------------------------------------------------

/// Reshape a decoded generation response into the canonical segment list.
///
/// The model is asked for `{"journey": [...]}` but may return the array at
/// the top level instead; both shapes are accepted. Segment fields are
/// passed through permissively -- a missing or non-string field coerces to
/// an empty string rather than rejecting the whole response.
pub fn extract_segments(value: &Value) -> Result<Vec<JourneySegment>, CoreError> {
    let list = value.get("journey").unwrap_or(value);

    let items = list.as_array().ok_or_else(|| {
        CoreError::UnexpectedShape(format!(
            "expected a journey array, got {}",
            json_type_name(list)
        ))
    })?;

    Ok(items.iter().map(segment_from_value).collect())
}

fn segment_from_value(value: &Value) -> JourneySegment {
    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    JourneySegment {
        timepoint: text("timepoint"),
        emotion: text("emotion"),
        description: text("description"),
        elements: text("elements"),
        transitions: text("transitions"),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Fallback synthesis
// ---------------------------------------------------------------------------

/// The hand-authored journey served when generation fails.
///
/// Returns the fixed five-phase arc truncated to `min(5, requested)`.
/// The arc is never extended past its five authored entries even when
/// more segments were requested; the cap is deliberate observable
/// behavior, not an oversight.
pub fn fallback_journey(requested: u32) -> Vec<JourneySegment> {
    let mut journey = vec![
        segment(
            "Arrival",
            "Anticipation",
            "Guests arrive and form their first impression of the event.",
            "Welcome signage, greeters, light refreshments, ambient music",
            "Gentle audio cue and staff guidance toward the main space",
        ),
        segment(
            "Main Event Beginning",
            "Engagement",
            "The program opens and guests settle into the experience.",
            "Opening remarks, a shift in lighting, signature drink service",
            "Energy builds as the program moves into its core content",
        ),
        segment(
            "Core Experience",
            "Immersion",
            "Guests are fully absorbed in the central activities.",
            "Interactive stations, featured presentations, shared activities",
            "Pacing tightens to set up the signature moment",
        ),
        segment(
            "Peak Moment",
            "Elevation",
            "The emotional high point guests will remember afterwards.",
            "Headline performance, reveal, or toast with full sensory support",
            "Gradual easing of pace so the moment can land",
        ),
        segment(
            "Conclusion",
            "Reflection & Connection",
            "The experience winds down and guests reflect together.",
            "Softer lighting, parting gifts, space for conversation",
            "Warm farewell and a clear invitation to stay connected",
        ),
    ];

    journey.truncate(requested as usize);
    journey
}

fn segment(
    timepoint: &str,
    emotion: &str,
    description: &str,
    elements: &str,
    transitions: &str,
) -> JourneySegment {
    JourneySegment {
        timepoint: timepoint.to_string(),
        emotion: emotion.to_string(),
        description: description.to_string(),
        elements: elements.to_string(),
        transitions: transitions.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
