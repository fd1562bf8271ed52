//! The relay endpoint: preflight, method rejection, and the relay itself.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use relay_core::prompt_text;
use relay_llm::{candidate_text, GeminiClient};
use tracing::info;

use crate::dto::{PromptRequest, TextResponse};
use crate::error::AppError;
use crate::ServerState;

/// CORS preflight. The grant headers are attached by the router layers.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Rejects any method other than POST or OPTIONS.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Relays a prompt to Gemini and returns the normalized text.
pub async fn relay(
    State(state): State<Arc<ServerState>>,
    body: String,
) -> Result<Json<TextResponse>, AppError> {
    let body = if body.is_empty() { "{}" } else { body.as_str() };
    let request: PromptRequest = serde_json::from_str(body)?;

    let prompt = prompt_text(request.prompt.as_ref()).ok_or(AppError::MissingPrompt)?;
    let api_key = state
        .gemini_api_key
        .as_deref()
        .ok_or(AppError::MissingApiKey)?;

    info!("Relay request: {}...", prompt.get(..50).unwrap_or(&prompt));

    let client = GeminiClient::new(api_key, state.gemini_api_base.as_deref());
    let completion = client.generate(&prompt).await?;

    // Raw text first: a non-JSON upstream answer is surfaced verbatim with
    // the upstream status. Parseable JSON is a relay success even when that
    // status is non-2xx.
    let parsed: serde_json::Value = match serde_json::from_str(&completion.body) {
        Ok(value) => value,
        Err(_) => {
            return Err(AppError::UpstreamDecode {
                raw: completion.body,
                status: completion.status,
            })
        }
    };

    let text = candidate_text(&parsed).unwrap_or_else(|| parsed.to_string());
    Ok(Json(TextResponse { text }))
}
