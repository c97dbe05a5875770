// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::rag::RagClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub rag: RagClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            rag: RagClient::new(config),
        }
    }
}
