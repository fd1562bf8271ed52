//! Core domain types and error definitions for the prompt relay.
//!
//! This crate provides the pieces shared across the relay:
//!
//! - [`RelayError`] — Error type for upstream API operations
//! - [`prompt_text`] — Validation and coercion of the inbound `prompt` field

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while talking to the upstream generation API.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The outbound request could not be sent or completed.
    #[error("Gemini request failed: {0}")]
    Upstream(String),

    /// The upstream response body could not be read.
    #[error("Failed to read Gemini response body: {0}")]
    UpstreamBody(String),
}

/// Extracts the relay prompt from a decoded `prompt` field.
///
/// Absent, `null`, `false`, `0`, and empty-string prompts are rejected with
/// `None`. Any other value passes validation; non-string values are carried
/// through as their compact JSON serialization.
pub fn prompt_text(prompt: Option<&Value>) -> Option<String> {
    let value = prompt?;
    match value {
        Value::Null => None,
        Value::Bool(b) => b.then(|| value.to_string()),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(value.to_string())
            }
        }
        Value::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
