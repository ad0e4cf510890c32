//! Boundary JSON response helpers.
//!
//! The relay's wire shapes: validation failures use `{"error": ...}`,
//! everything else (including server-side failures) uses `{"reply": ...}`.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReplyBody {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 200 with the relayed reply.
pub fn ok_reply(reply: impl Into<String>) -> (StatusCode, Json<ReplyBody>) {
    (StatusCode::OK, Json(ReplyBody { reply: reply.into() }))
}

/// 400 with the validation error shape.
pub fn bad_request(error: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::BAD_REQUEST, Json(ErrorBody { error: error.into() }))
}

/// 500 carrying a human-readable message in the reply field.
pub fn internal_reply(reply: impl Into<String>) -> (StatusCode, Json<ReplyBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ReplyBody { reply: reply.into() }),
    )
}
