//! Pure domain logic for the Soirée AI feature endpoints.
//!
//! Request validation, segment planning, prompt building, response
//! normalization, and fallback synthesis for the emotional-journey and
//! weather-mood features. No IO lives here; everything is a pure function
//! over validated inputs so the api crate can sequence the pieces and
//! tests can exercise them directly.

pub mod error;
pub mod journey;
pub mod weather;
