//! HTTP surface: one alt-text endpoint (plus its alias) and a health check.

mod error;
mod handler;

use alttext_core::AltTextGenerator;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

/// Shared, read-only state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub generator: AltTextGenerator,
}

impl AppState {
    pub fn new(generator: AltTextGenerator) -> Self {
        Self { generator }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health))
        .route("/api/generate-alt-text", post(handler::generate_alt_text))
        .route("/api/alt-text", post(handler::generate_alt_text))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
