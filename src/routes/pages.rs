// src/routes/pages.rs
use std::path::Path;

use axum::{http::StatusCode, response::Html};

use crate::error::AppError;

// Page documents are produced by the front-end build; the server treats them
// as opaque files.
const PAGES_DIR: &str = "public";

async fn render(name: &str) -> Result<Html<String>, AppError> {
    let path = Path::new(PAGES_DIR).join(name);
    Ok(Html(tokio::fs::read_to_string(path).await?))
}

pub async fn home_page() -> Result<Html<String>, AppError> {
    render("home.html").await
}

pub async fn chat_page() -> Result<Html<String>, AppError> {
    render("chat.html").await
}

pub async fn settings_page() -> Result<Html<String>, AppError> {
    render("settings.html").await
}

// Unmatched routes get the home page body under a 404 status.
pub async fn not_found() -> Result<(StatusCode, Html<String>), AppError> {
    Ok((StatusCode::NOT_FOUND, render("home.html").await?))
}
