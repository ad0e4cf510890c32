use std::path::Path;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::llm::ProviderRegistry;
use crate::transcript::Transcript;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub providers: ProviderRegistry,
    pub transcript: Transcript,
}

pub fn build_app(state: AppState, request_timeout_secs: u64, static_dir: &Path) -> Router {
    Router::new()
        .route("/chat", post(handlers::gemini_chat))
        .route("/mistral_chat", post(handlers::mistral_chat))
        .route("/groq_chat", post(handlers::groq_chat))
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
}
