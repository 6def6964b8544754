use crate::Result;
use kontrol_types::{MessagePreview, truncate_chars};
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::parser::{SessionEvent, parse_line};
use super::{FIRST_MESSAGE_CHARS, PREVIEW_LIMIT, SCAN_LINE_LIMIT};

/// Summary fields gathered from the head of one session log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionScan {
    pub started_at: String,
    pub model: String,
    pub message_count: usize,
    pub first_message: String,
    pub messages: Vec<MessagePreview>,
    /// Physical lines read, malformed ones included
    pub lines_scanned: usize,
    /// Lines in the window that produced no event
    pub lines_ignored: usize,
}

impl SessionScan {
    fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Started { timestamp } => self.started_at = timestamp,
            SessionEvent::ModelChanged { model } => self.model = model,
            SessionEvent::Message { role, text, ts } => {
                self.message_count += 1;

                if text.is_empty() {
                    return;
                }
                if self.first_message.is_empty() {
                    self.first_message = truncate_chars(&text, FIRST_MESSAGE_CHARS);
                }
                if self.messages.len() < PREVIEW_LIMIT {
                    self.messages.push(MessagePreview { role, text, ts });
                }
            }
        }
    }
}

/// Scan the first `SCAN_LINE_LIMIT` lines of a session log file
pub fn scan_session_log(path: &Path) -> Result<SessionScan> {
    let file = std::fs::File::open(path)?;
    scan_session_reader(BufReader::new(file))
}

/// Scan the first `SCAN_LINE_LIMIT` lines from any line source.
///
/// Lines that fail to classify are skipped without error; only I/O
/// failures abort the scan.
pub fn scan_session_reader<R: BufRead>(reader: R) -> Result<SessionScan> {
    let mut scan = SessionScan::default();

    for line in reader.split(b'\n').take(SCAN_LINE_LIMIT) {
        let line = line?;
        scan.lines_scanned += 1;

        match parse_line(&line) {
            Some(event) => scan.apply(event),
            None => scan.lines_ignored += 1,
        }
    }

    Ok(scan)
}
