//! Session-log line builders.
//!
//! Each function returns one JSONL line (without the trailing newline) in the
//! shape the OpenClaw agent runtime writes.

use serde_json::{Value, json};

pub fn session_line(timestamp: &str) -> String {
    json!({"type": "session", "version": 3, "timestamp": timestamp}).to_string()
}

pub fn model_change_line(model_id: &str) -> String {
    json!({"type": "model_change", "provider": "anthropic", "modelId": model_id}).to_string()
}

/// Message with plain-string content and no timestamp
pub fn message_line(role: &str, text: &str) -> String {
    json!({"type": "message", "message": {"role": role, "content": text}}).to_string()
}

/// Message with a `timestamp` inside the payload
pub fn message_line_at(role: &str, text: &str, timestamp: Value) -> String {
    json!({
        "type": "message",
        "message": {"role": role, "content": text, "timestamp": timestamp}
    })
    .to_string()
}

/// Message whose content is an array of typed blocks
pub fn message_blocks_line(role: &str, blocks: Value) -> String {
    json!({"type": "message", "message": {"role": role, "content": blocks}}).to_string()
}
