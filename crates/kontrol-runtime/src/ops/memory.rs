use crate::{Error, Result};
use kontrol_providers::{discover_memory_notes, read_memory_note};
use kontrol_types::{MemoryArchive, MemoryEntry};
use std::path::{Path, PathBuf};

/// Builds the memory archive from `*.md` notes
#[derive(Debug, Clone)]
pub struct MemoryArchiveBuilder {
    memory_dir: PathBuf,
    strict: bool,
}

impl MemoryArchiveBuilder {
    pub fn new(memory_dir: impl Into<PathBuf>) -> Self {
        Self {
            memory_dir: memory_dir.into(),
            strict: false,
        }
    }

    /// In strict mode an unreadable note aborts the build instead of being skipped
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn memory_dir(&self) -> &Path {
        &self.memory_dir
    }

    pub fn build(&self, generated_at: i64) -> Result<MemoryArchive> {
        Ok(MemoryArchive {
            generated_at,
            entries: self.collect()?,
        })
    }

    /// Entries ordered by filename, descending
    pub fn collect(&self) -> Result<Vec<MemoryEntry>> {
        let notes = discover_memory_notes(&self.memory_dir)?;
        let mut entries = Vec::with_capacity(notes.len());

        for note in notes {
            match read_memory_note(&note) {
                Ok(entry) => entries.push(entry),
                Err(source) if self.strict => {
                    return Err(Error::Memory {
                        path: note.path,
                        source,
                    });
                }
                Err(err) => {
                    tracing::warn!(
                        path = %note.path.display(),
                        error = %err,
                        "skipping unreadable memory note"
                    );
                }
            }
        }

        Ok(entries)
    }
}
