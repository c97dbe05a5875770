// src/services/rag.rs
use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

/// How an upstream exchange can fail. Classification drives which localized
/// message the user sees: timeout and connection failures get their own
/// texts, everything else collapses into the generic one.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("upstream request timed out")]
    Timeout,
    #[error("could not connect to upstream")]
    Connect,
    #[error("upstream returned {0}")]
    Status(StatusCode),
    #[error("malformed upstream response")]
    Malformed(#[source] reqwest::Error),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout
        } else if err.is_connect() {
            RelayError::Connect
        } else if let Some(status) = err.status() {
            RelayError::Status(status)
        } else {
            RelayError::Malformed(err)
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RagPayload<'a> {
    session_id: &'a str,
    action: &'a str,
    chat_input: &'a str,
}

#[derive(Deserialize)]
struct RagOutput {
    output: Option<String>,
}

/// Client for the remote RAG chat endpoint.
#[derive(Clone)]
pub struct RagClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    pacing_delay: Duration,
}

impl RagClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.rag_api_url.clone(),
            timeout: config.request_timeout,
            pacing_delay: config.pacing_delay,
        }
    }

    /// Forward one validated message and return the upstream `output` field,
    /// or `None` when the upstream answered without one. One shot, no
    /// retries.
    pub async fn send_message(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<Option<String>, RelayError> {
        if !self.pacing_delay.is_zero() {
            tokio::time::sleep(self.pacing_delay).await;
        }

        let payload = RagPayload {
            session_id,
            action: "sendMessage",
            chat_input: message,
        };

        debug!(session_id, "relaying message upstream");
        let response = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body: RagOutput = response.json().await?;
        Ok(body.output)
    }
}
