//! Domain error type shared across core modules.

/// Errors produced by the pure domain layer.
///
/// Variants carry enough context for the api crate to map them onto the
/// wire format without re-parsing messages.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required request parameter is absent, empty, or non-positive.
    ///
    /// `field` is the wire-format (camelCase) name so the rendered
    /// message matches the public API contract exactly.
    #[error("Missing required parameter: {field}")]
    MissingParameter {
        /// Wire name of the offending field.
        field: &'static str,
    },

    /// A generation response could not be reshaped into the expected form.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}
