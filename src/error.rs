// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::{message::ChatReply, replies};

/// Failures outside the relay's own handling. Everything the relay knows how
/// to recover from is reported through `ChatReply::error` with a 200; only
/// these surface as a 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(%self, "internal server error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatReply::error(replies::INTERNAL)),
        )
            .into_response()
    }
}
