// Error types
pub mod error;

// OpenClaw agent session logs
pub mod openclaw;

// Dated memory notes
pub mod memory;

pub use openclaw::{
    AgentSessions, MetadataIndex, SessionEvent, SessionLogFile, SessionMetadata, SessionScan,
    discover_agents, discover_session_logs, extract_text, parse_line, scan_session_log,
};

pub use memory::{MemoryNote, discover_memory_notes, read_memory_note};

// Error types
pub use error::{Error, Result};
