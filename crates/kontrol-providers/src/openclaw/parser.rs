use kontrol_types::truncate_chars;
use serde_json::Value;

use super::PREVIEW_TEXT_CHARS;
use super::schema::{LogRecord, MessageBody};

/// A session-log line that carries something the archive uses
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// `type = session`; empty when `timestamp` is missing or not a string
    Started { timestamp: String },
    /// `type = model_change`; empty when `modelId` is missing or not a string
    ModelChanged { model: String },
    /// `type = message`
    Message {
        role: String,
        /// Excerpt per [`extract_text`], already capped at 300 characters
        text: String,
        ts: Value,
    },
}

/// Classify one raw log line.
///
/// Returns `None` for anything that does not yield an event: invalid UTF-8,
/// invalid JSON, non-object values, missing or unknown `type`.
pub fn parse_line(line: &[u8]) -> Option<SessionEvent> {
    let record: LogRecord = serde_json::from_slice(line).ok()?;

    match record {
        LogRecord::Session(start) => Some(SessionEvent::Started {
            timestamp: string_or_empty(&start.timestamp),
        }),
        LogRecord::ModelChange(change) => Some(SessionEvent::ModelChanged {
            model: string_or_empty(&change.model_id),
        }),
        LogRecord::Message(record) => {
            let MessageBody {
                role,
                content,
                timestamp,
            } = record.message;
            Some(SessionEvent::Message {
                role: string_or_empty(&role),
                text: extract_text(&content),
                ts: timestamp,
            })
        }
        LogRecord::Unknown => None,
    }
}

/// Pull a display excerpt out of a message `content` payload.
///
/// - plain string: its first 300 characters
/// - array of blocks: the `text` of the first block with `type == "text"`,
///   truncated to 300 characters; later text blocks are never consulted
/// - anything else: empty
pub fn extract_text(content: &Value) -> String {
    match content {
        Value::String(text) => truncate_chars(text, PREVIEW_TEXT_CHARS),
        Value::Array(blocks) => blocks
            .iter()
            .find(|block| block.get("type").and_then(Value::as_str) == Some("text"))
            .and_then(|block| block.get("text"))
            .and_then(Value::as_str)
            .map(|text| truncate_chars(text, PREVIEW_TEXT_CHARS))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn string_or_empty(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}
