use serde::{Deserialize, Serialize};

use crate::{MemoryEntry, SessionRecord};

/// Top-level document written to the sessions archive file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionArchive {
    /// Generation time in epoch milliseconds
    pub generated_at: i64,
    pub sessions: Vec<SessionRecord>,
}

/// Top-level document written to the memory archive file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryArchive {
    pub generated_at: i64,
    pub entries: Vec<MemoryEntry>,
}
