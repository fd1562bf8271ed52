//! Shared test harness: spawns the relay and a stub upstream on ephemeral ports.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use relay_server::{app, ServerState};

/// A relay instance listening on an ephemeral local port.
pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawns the relay with the given configuration.
    pub async fn spawn(state: ServerState) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());
        let router = app(Arc::new(state));

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server crashed");
        });

        Self { address }
    }
}

/// Spawns a stub upstream that answers every request with a canned response.
/// Returns its base URL for use as the relay's upstream override.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> String {
    let router = Router::new().fallback(move || async move { (status, body) });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub upstream crashed");
    });

    address
}
