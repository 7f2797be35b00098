use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use soiree_api::config::ServerConfig;
use soiree_api::router::build_app_router;
use soiree_api::state::AppState;
use soiree_genai::{GenAiError, JsonGenerator};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Deterministic generator returning a fixed JSON value on every call.
pub struct StaticGenerator(pub Value);

#[async_trait]
impl JsonGenerator for StaticGenerator {
    async fn generate_json(&self, _system: &str, _user: &str) -> Result<Value, GenAiError> {
        Ok(self.0.clone())
    }
}

/// Generator that fails every call as if the upstream rejected it.
pub struct FailingGenerator;

#[async_trait]
impl JsonGenerator for FailingGenerator {
    async fn generate_json(&self, _system: &str, _user: &str) -> Result<Value, GenAiError> {
        Err(GenAiError::Api {
            status: 500,
            body: "upstream unavailable".to_string(),
        })
    }
}

/// Build the full application router with all middleware layers, backed
/// by the given generator.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS headers, request ID, timeout,
/// panic recovery) that production uses.
pub fn build_test_app(generator: Arc<dyn JsonGenerator>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        generator,
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    request(app, Method::GET, uri).await
}

/// Issue a bodyless request with an arbitrary method against the app.
pub async fn request(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
