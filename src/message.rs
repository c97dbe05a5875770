// src/message.rs
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    // Missing message is treated the same as an empty one.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ChatReply {
    /// Successful relay outcome, stamped with the current unix time.
    pub fn ok(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            error: false,
            timestamp: Some(unix_timestamp()),
        }
    }

    /// Recovered failure, reported through the `error` flag rather than the
    /// HTTP status.
    pub fn error(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            error: true,
            timestamp: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIssued {
    pub session_id: String,
    pub success: bool,
}

fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
