// src/routes/chat.rs
use axum::{Json, extract::State};
use tracing::warn;

use crate::{
    message::{ChatReply, ChatRequest, SessionIssued},
    replies,
    services::{rag::RelayError, session},
    state::SharedState,
};

pub async fn generate_session_handler() -> Json<SessionIssued> {
    Json(SessionIssued {
        session_id: session::issue_session_id(),
        success: true,
    })
}

pub async fn send_message_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatReply> {
    // Validation short-circuits the upstream call; first failure wins.
    let session_id = payload.session_id.as_deref().unwrap_or("");
    if session_id.chars().count() < 10 {
        return Json(ChatReply::error(replies::INVALID_SESSION));
    }

    let message = payload.message.trim();
    if message.is_empty() {
        return Json(ChatReply::error(replies::EMPTY_MESSAGE));
    }

    match state.rag.send_message(session_id, message).await {
        Ok(output) => {
            let reply = output.unwrap_or_else(|| replies::FALLBACK.to_string());
            Json(ChatReply::ok(reply))
        }
        // Upstream failures stay a transport-level success; the browser
        // always parses JSON and checks the `error` flag.
        Err(err) => {
            warn!(error = %err, session_id, "relay failed");
            let reply = match err {
                RelayError::Timeout => replies::TIMEOUT,
                RelayError::Connect => replies::CONNECTION,
                RelayError::Status(_) | RelayError::Malformed(_) => replies::UNEXPECTED,
            };
            Json(ChatReply::error(reply))
        }
    }
}
