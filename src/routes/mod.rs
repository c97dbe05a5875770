// src/routes/mod.rs
pub mod chat;
pub mod pages;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{generate_session_handler, send_message_handler};
use pages::{chat_page, home_page, not_found, settings_page};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(home_page))
        .route("/chat", get(chat_page))
        .route("/settings", get(settings_page))
        .route("/generate_session", post(generate_session_handler))
        .route("/send_message", post(send_message_handler))
        .nest_service("/static", ServeDir::new("public/static"))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}
