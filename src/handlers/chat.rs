//! Chat relay HTTP handlers.
//!
//! Each route runs the same sequence: validate the message, append the user
//! entry, look up the provider adapter, forward the message, and map the
//! outcome to the wire shapes. A failed call leaves at most the user entry
//! in the transcript; a successful one appends user then assistant.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, info};

use crate::llm::{Provider, Role};
use crate::response;
use crate::server::AppState;
use crate::transcript::TranscriptEntry;

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    /// Optional so that an absent field reaches the validation path below
    /// instead of being rejected by the extractor.
    #[serde(default)]
    message: Option<String>,
}

/// POST /chat
pub async fn gemini_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatMessageRequest>,
) -> Response {
    relay_chat(state, Provider::Gemini, req).await
}

/// POST /mistral_chat
pub async fn mistral_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatMessageRequest>,
) -> Response {
    relay_chat(state, Provider::Mistral, req).await
}

/// POST /groq_chat
pub async fn groq_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatMessageRequest>,
) -> Response {
    relay_chat(state, Provider::Groq, req).await
}

async fn relay_chat(state: AppState, provider: Provider, req: ChatMessageRequest) -> Response {
    let Some(message) = req.message.filter(|m| !m.is_empty()) else {
        return response::bad_request("Message not provided in request body.").into_response();
    };

    state
        .transcript
        .append(TranscriptEntry {
            role: Role::User,
            content: message.clone(),
            provider: provider.display_name().to_string(),
        })
        .await;
    info!(%provider, "received message");

    let Some(adapter) = state.providers.get(&provider) else {
        error!(%provider, "API key is not set");
        return response::internal_reply(format!(
            "Server error: {provider} API key is missing. Please set it in your .env file."
        ))
        .into_response();
    };

    match adapter.relay(&message).await {
        Ok(reply) => {
            state
                .transcript
                .append(TranscriptEntry {
                    role: Role::Assistant,
                    content: reply.clone(),
                    provider: provider.display_name().to_string(),
                })
                .await;
            info!(%provider, "relayed reply");
            response::ok_reply(reply).into_response()
        }
        Err(e) => {
            error!(%provider, error = %e, "relay failed");
            response::internal_reply(format!(
                "Oops! There was an issue connecting to {provider}. Error: {e}"
            ))
            .into_response()
        }
    }
}
