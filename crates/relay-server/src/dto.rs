//! Data transfer objects for HTTP message serialization.

use serde::{Deserialize, Serialize};

/// Request body for the relay endpoint.
///
/// `prompt` is decoded as an arbitrary JSON value so that validation can
/// distinguish absent from falsy from usable.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<serde_json::Value>,
}

/// Successful relay response.
#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub text: String,
}
