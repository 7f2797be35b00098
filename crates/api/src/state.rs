use std::sync::Arc;

use soiree_genai::JsonGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Generation model client. A trait object so integration tests can
    /// substitute deterministic generators.
    pub generator: Arc<dyn JsonGenerator>,
}
