//! Application error types and Axum response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use relay_core::RelayError;
use serde::Serialize;

/// Application-level errors with HTTP status code mapping.
///
/// Every variant renders as a single JSON object with an `error` field;
/// [`AppError::UpstreamDecode`] additionally carries the unparsed upstream
/// body and status for diagnosis.
#[derive(Debug)]
pub enum AppError {
    /// Inbound method was neither POST nor OPTIONS.
    MethodNotAllowed,
    /// The `prompt` field was missing or empty.
    MissingPrompt,
    /// The server-side API key is not configured.
    MissingApiKey,
    /// The upstream body was not valid JSON.
    UpstreamDecode { raw: String, status: u16 },
    /// Any other failure: body parse, network, unexpected.
    Internal(String),
}

/// JSON body shared by every failure response.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

impl ErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            raw: None,
            status: None,
        }
    }
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody::new("Only POST is allowed"),
            ),
            AppError::MissingPrompt => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("prompt is required"),
            ),
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("API key is not set on server (check GEMINI_API_KEY)"),
            ),
            AppError::UpstreamDecode { raw, status } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Failed to parse Gemini response as JSON".into(),
                    raw: Some(raw),
                    status: Some(status),
                },
            ),
            AppError::Internal(message) => {
                tracing::error!("Relay error: {}", message);
                let message = if message.is_empty() {
                    "Unknown error in function".to_string()
                } else {
                    message
                };
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::new(message))
            }
        };
        (status, Json(body)).into_response()
    }
}
