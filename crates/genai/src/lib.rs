//! Client for the external generation model service.
//!
//! Wraps the chat-completion HTTP API behind [`client::GenAiClient`] and
//! the [`generator::JsonGenerator`] trait so callers depend on "prompt in,
//! decoded JSON out" rather than on the transport. Failures are returned
//! as values; nothing in this crate panics past construction.

pub mod client;
pub mod config;
pub mod generator;

pub use client::{GenAiClient, GenAiError};
pub use config::GenAiConfig;
pub use generator::JsonGenerator;
