use serde::{Deserialize, Serialize};

/// One dated memory note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Filename without its `.md` extension (e.g. "2024-02-01")
    pub date: String,
    pub filename: String,
    /// Raw note text; scrubbing happens on the whole archive later
    pub content: String,
}
