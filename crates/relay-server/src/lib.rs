//! HTTP server for the prompt relay.
//!
//! Exposes the router assembly and server state so the binary and the
//! integration tests drive the same application.

pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

/// Shared server state: configuration injected into the relay handler.
pub struct ServerState {
    /// Secret key for the generation API. `None` when unset or empty.
    pub gemini_api_key: Option<String>,
    /// Optional upstream base-URL override (proxies, test stubs).
    pub gemini_api_base: Option<String>,
}

impl ServerState {
    /// Reads the relay configuration from process environment variables.
    ///
    /// An empty `GEMINI_API_KEY` counts as unset.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .ok()
                .filter(|base| !base.is_empty()),
        }
    }
}

/// Builds the relay router.
///
/// Every response carries the fixed cross-origin grant headers, including
/// error responses and the health probe.
pub fn app(state: Arc<ServerState>) -> Router {
    Router::new()
        .route(
            "/",
            post(handlers::relay::relay)
                .options(handlers::relay::preflight)
                .fallback(handlers::relay::method_not_allowed),
        )
        .route("/health", get(handlers::health))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .with_state(state)
}
