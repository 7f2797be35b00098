//! Integration tests for the weather-mood adaptation endpoint.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{body_json, post_json, request, FailingGenerator, StaticGenerator};
use serde_json::{json, Value};

const URI: &str = "/api/v1/features/weather-mood";

fn valid_request() -> Value {
    json!({
        "eventType": "garden party",
        "weatherCondition": "light rain",
        "venueType": "outdoor",
    })
}

fn model_adaptation() -> Value {
    json!({
        "adaptations": [
            { "aspect": "Lighting", "recommendation": "warm string lights", "reason": "rain dims the sky" },
            { "aspect": "Music", "recommendation": "acoustic set", "reason": "matches the patter" },
            { "aspect": "Activities", "recommendation": "move croquet under cover", "reason": "wet lawn" },
            { "aspect": "Comfort", "recommendation": "umbrella stands at doors", "reason": "guest arrivals" },
        ]
    })
}

// ---------------------------------------------------------------------------
// Test: successful generation returns the normalized adjustments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn successful_generation_returns_model_adjustments() {
    let app = common::build_test_app(Arc::new(StaticGenerator(model_adaptation())));
    let response = post_json(app, URI, &valid_request()).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let adjustments = json["adaptation"]["adjustments"].as_array().unwrap();
    assert_eq!(adjustments.len(), 4);
    assert_eq!(adjustments[0]["recommendation"], "warm string lights");

    let metadata = &json["adaptation"]["metadata"];
    assert_eq!(metadata["eventType"], "garden party");
    assert_eq!(metadata["weatherCondition"], "light rain");
    assert_eq!(metadata["venueType"], "outdoor");
    assert!(metadata.get("error").is_none());
}

// ---------------------------------------------------------------------------
// Test: generation failure degrades to the standard adaptation set
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generation_failure_returns_standard_adaptations_with_200() {
    let app = common::build_test_app(Arc::new(FailingGenerator));
    let response = post_json(app, URI, &valid_request()).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let adjustments = json["adaptation"]["adjustments"].as_array().unwrap();
    let aspects: Vec<&str> = adjustments
        .iter()
        .map(|a| a["aspect"].as_str().unwrap())
        .collect();
    assert_eq!(aspects, ["Lighting", "Music", "Activities", "Comfort"]);

    assert!(json["adaptation"]["metadata"]["error"].is_string());
}

// ---------------------------------------------------------------------------
// Test: venueType defaults to indoor when omitted
// ---------------------------------------------------------------------------

#[tokio::test]
async fn omitted_venue_type_defaults_to_indoor() {
    let body = json!({ "eventType": "banquet", "weatherCondition": "heat wave" });

    let app = common::build_test_app(Arc::new(StaticGenerator(model_adaptation())));
    let response = post_json(app, URI, &body).await;

    let json = body_json(response).await;
    assert_eq!(json["adaptation"]["metadata"]["venueType"], "indoor");
}

// ---------------------------------------------------------------------------
// Test: missing required fields return 400 in precedence order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_weather_condition_returns_400() {
    let body = json!({ "eventType": "garden party" });

    let app = common::build_test_app(Arc::new(FailingGenerator));
    let response = post_json(app, URI, &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(
        json["message"],
        "Missing required parameter: weatherCondition"
    );
}

#[tokio::test]
async fn missing_both_required_fields_reports_event_type() {
    let app = common::build_test_app(Arc::new(FailingGenerator));
    let response = post_json(app, URI, &json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Missing required parameter: eventType");
}

// ---------------------------------------------------------------------------
// Test: method handling mirrors the journey endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn options_returns_200_and_delete_returns_405() {
    let app = common::build_test_app(Arc::new(FailingGenerator));

    let preflight = request(app.clone(), Method::OPTIONS, URI).await;
    assert_eq!(preflight.status(), StatusCode::OK);

    let rejected = request(app, Method::DELETE, URI).await;
    assert_eq!(rejected.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json = body_json(rejected).await;
    assert_eq!(json["message"], "Method not allowed");
}
