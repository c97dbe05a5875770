// src/services/session.rs
use uuid::Uuid;

/// Issue a fresh opaque session identifier.
///
/// The id is held by the browser for the lifetime of a chat and echoed back
/// with every message; nothing is stored server-side. Simple (hyphen-less)
/// formatting keeps the downstream length check a plain character count.
pub fn issue_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}
