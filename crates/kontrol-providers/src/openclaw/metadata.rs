use crate::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Per-agent metadata index filename inside the `sessions` directory
pub const METADATA_INDEX_FILE: &str = "sessions.json";

/// Label and spawn lineage attached to one session by the agent runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMetadata {
    pub session_id: Option<String>,
    pub label: Option<String>,
    pub spawned_by: Option<String>,
}

impl SessionMetadata {
    fn from_object(object: &serde_json::Map<String, Value>) -> Self {
        let field = |name: &str| object.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            session_id: field("sessionId"),
            label: field("label"),
            spawned_by: field("spawnedBy"),
        }
    }
}

/// Metadata records of one agent, in the order they appear in the index file.
///
/// The index maps arbitrary keys to records; the keys are not used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataIndex {
    records: Vec<SessionMetadata>,
}

impl MetadataIndex {
    /// Load `sessions.json` from an agent's sessions directory.
    ///
    /// A missing file is an empty index. An unreadable or malformed file is
    /// an error; callers decide whether that is fatal.
    pub fn load(sessions_dir: &Path) -> Result<Self> {
        let path = sessions_dir.join(METADATA_INDEX_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path)?;
        Self::from_json_str(&text).map_err(|e| match e {
            Error::Parse(msg) => Error::Parse(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse an index document. Entries that are not objects are ignored.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(entries) = value else {
            return Err(Error::Parse(
                "metadata index must be a JSON object".to_string(),
            ));
        };

        let records = entries
            .values()
            .filter_map(Value::as_object)
            .map(SessionMetadata::from_object)
            .collect();

        Ok(Self { records })
    }

    /// First record whose `sessionId` equals `session_id`.
    ///
    /// Later duplicates are shadowed.
    pub fn lookup(&self, session_id: &str) -> Option<&SessionMetadata> {
        self.records
            .iter()
            .find(|record| record.session_id.as_deref() == Some(session_id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
