//! Google Gemini API client for one-shot content generation.

use relay_core::RelayError;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Wraps a prompt in the generateContent envelope.
fn envelope(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    }
}

/// Raw outcome of a generateContent call.
///
/// The body is kept as unparsed text so that a non-JSON upstream answer can be
/// surfaced verbatim to the caller along with the upstream status.
#[derive(Debug)]
pub struct RawCompletion {
    pub status: u16,
    pub body: String,
}

/// Client for Gemini's generateContent API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GeminiClient {
    /// Creates a new client for the given key and optional API base URL.
    pub fn new(api_key: &str, api_base: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            api_base: api_base
                .unwrap_or(GEMINI_API_BASE)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Sends a single-prompt generation request and returns the raw response.
    ///
    /// A non-success upstream status is not an error at this layer; the status
    /// travels with the body and is only surfaced when the body turns out not
    /// to be JSON.
    pub async fn generate(&self, prompt: &str) -> Result<RawCompletion, RelayError> {
        let request = envelope(prompt);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, GEMINI_MODEL, self.api_key
        );

        debug!(
            model = GEMINI_MODEL,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RelayError::UpstreamBody(e.to_string()))?;

        Ok(RawCompletion { status, body })
    }
}

/// Looks up `candidates[0].content.parts[0].text` in a parsed response.
///
/// Returns `None` when any link in the path is absent or the leaf is not a
/// string; callers fall back to stringifying the whole response.
pub fn candidate_text(value: &Value) -> Option<String> {
    value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_wraps_prompt_in_contents_parts() {
        let request = envelope("tell me a joke");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [ { "parts": [ { "text": "tell me a joke" } ] } ] })
        );
    }

    #[test]
    fn candidate_text_extracts_first_part() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "hello" }, { "text": "ignored" } ] } }
            ]
        });
        assert_eq!(candidate_text(&response), Some("hello".to_string()));
    }

    #[test]
    fn candidate_text_is_none_when_path_is_missing() {
        for response in [
            json!({}),
            json!({ "candidates": [] }),
            json!({ "candidates": [ { "content": { "parts": [] } } ] }),
            json!({ "error": { "code": 429, "message": "quota exceeded" } }),
        ] {
            assert_eq!(candidate_text(&response), None, "expected no text in {response}");
        }
    }

    #[test]
    fn candidate_text_is_none_for_non_string_leaf() {
        let response = json!({
            "candidates": [ { "content": { "parts": [ { "text": 7 } ] } } ]
        });
        assert_eq!(candidate_text(&response), None);
    }
}
