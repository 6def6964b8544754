use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sessions modified within this many milliseconds of generation time are live.
pub const LIVENESS_WINDOW_MS: i64 = 300_000;

/// Point-in-time liveness of a session, recomputed on every run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Completed,
}

impl SessionStatus {
    /// Classify a session by the age of its last write.
    ///
    /// The window is half-open: a log exactly `LIVENESS_WINDOW_MS` old is
    /// already completed. Files with an mtime ahead of the clock count as active.
    pub fn classify(updated_at: i64, generated_at: i64) -> Self {
        if generated_at.saturating_sub(updated_at) < LIVENESS_WINDOW_MS {
            SessionStatus::Active
        } else {
            SessionStatus::Completed
        }
    }
}

/// One message excerpt kept for dashboard display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagePreview {
    pub role: String,
    pub text: String,
    /// Copied verbatim from the message payload; `null` when absent
    #[serde(default)]
    pub ts: Value,
}

/// Summary of one session log, as consumed by the dashboard
///
/// `session_id` is only unique per agent; `(agent, session_id)` is the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub agent: String,
    pub label: Option<String>,
    pub spawned_by: Option<String>,
    pub started_at: String,
    /// Log file mtime in epoch milliseconds
    pub updated_at: i64,
    pub model: String,
    pub message_count: usize,
    pub first_message: String,
    pub status: SessionStatus,
    pub messages: Vec<MessagePreview>,
}
