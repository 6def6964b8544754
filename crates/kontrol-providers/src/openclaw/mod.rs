pub mod discovery;
pub mod io;
pub mod metadata;
pub mod parser;
pub(crate) mod schema;

pub use discovery::{AgentSessions, SessionLogFile, discover_agents, discover_session_logs};
pub use io::{SessionScan, scan_session_log, scan_session_reader};
pub use metadata::{METADATA_INDEX_FILE, MetadataIndex, SessionMetadata};
pub use parser::{SessionEvent, extract_text, parse_line};

/// Physical lines read from a session log before the scan stops
pub const SCAN_LINE_LIMIT: usize = 300;

/// Maximum message previews kept per session
pub const PREVIEW_LIMIT: usize = 30;

/// Maximum characters of a preview excerpt
pub const PREVIEW_TEXT_CHARS: usize = 300;

/// Maximum characters of `firstMessage`
pub const FIRST_MESSAGE_CHARS: usize = 150;

/// Session log file extension (without the dot)
pub const SESSION_LOG_EXTENSION: &str = "jsonl";
