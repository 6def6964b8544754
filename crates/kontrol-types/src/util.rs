use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Keep at most `max` characters of `s`.
///
/// Counts Unicode scalar values, so multi-byte text is never split mid-character.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Convert a filesystem timestamp to epoch milliseconds
pub fn system_time_to_millis(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp_millis()
}

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
