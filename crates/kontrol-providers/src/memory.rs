use crate::Result;
use crate::openclaw::discovery::{is_hidden, shallow_entries};
use kontrol_types::MemoryEntry;
use std::path::{Path, PathBuf};

/// Memory note file extension (without the dot)
pub const MEMORY_NOTE_EXTENSION: &str = "md";

/// A dated note file found on disk, not yet read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryNote {
    /// Filename with the `.md` suffix removed
    pub date: String,
    pub filename: String,
    pub path: PathBuf,
}

/// Enumerate `*.md` notes in `memory_dir`, newest first.
///
/// Ordering is descending by filename, which is chronological only because
/// notes are named `YYYY-MM-DD.md`. A missing directory yields no notes.
pub fn discover_memory_notes(memory_dir: &Path) -> Result<Vec<MemoryNote>> {
    if !memory_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut notes = Vec::new();
    for entry in shallow_entries(memory_dir) {
        let entry = entry?;
        if is_hidden(&entry) || !entry.path().is_file() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        let Some(date) = filename
            .strip_suffix(MEMORY_NOTE_EXTENSION)
            .and_then(|stem| stem.strip_suffix('.'))
        else {
            continue;
        };

        notes.push(MemoryNote {
            date: date.to_string(),
            filename: filename.clone(),
            path: entry.path().to_path_buf(),
        });
    }

    notes.sort_by(|a, b| b.filename.cmp(&a.filename));
    Ok(notes)
}

/// Read a note's full text into an archive entry
pub fn read_memory_note(note: &MemoryNote) -> Result<MemoryEntry> {
    let content = std::fs::read_to_string(&note.path)?;
    Ok(MemoryEntry {
        date: note.date.clone(),
        filename: note.filename.clone(),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_notes_sorted_descending_by_filename() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("2024-01-01.md"), "jan")?;
        fs::write(temp_dir.path().join("2024-02-01.md"), "feb")?;
        fs::write(temp_dir.path().join("2023-12-31.md"), "dec")?;

        let notes = discover_memory_notes(temp_dir.path())?;
        let dates: Vec<&str> = notes.iter().map(|n| n.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-02-01", "2024-01-01", "2023-12-31"]);
        Ok(())
    }

    #[test]
    fn test_non_markdown_and_hidden_files_are_ignored() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("2024-01-01.md"), "keep")?;
        fs::write(temp_dir.path().join("notes.txt"), "skip")?;
        fs::write(temp_dir.path().join(".draft.md"), "skip")?;
        fs::create_dir(temp_dir.path().join("archive.md"))?;

        let notes = discover_memory_notes(temp_dir.path())?;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].filename, "2024-01-01.md");
        Ok(())
    }

    #[test]
    fn test_missing_dir_is_empty() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let notes = discover_memory_notes(&temp_dir.path().join("memory"))?;
        assert!(notes.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_note_keeps_raw_content() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let body = "# 2024-02-01\n\n- shipped archive job\n";
        fs::write(temp_dir.path().join("2024-02-01.md"), body)?;

        let notes = discover_memory_notes(temp_dir.path())?;
        let entry = read_memory_note(&notes[0])?;
        assert_eq!(entry.date, "2024-02-01");
        assert_eq!(entry.filename, "2024-02-01.md");
        assert_eq!(entry.content, body);
        Ok(())
    }

    #[test]
    fn test_read_non_utf8_note_fails() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("2024-03-01.md"), [0xff, 0xfe, 0x00])?;

        let notes = discover_memory_notes(temp_dir.path())?;
        assert!(read_memory_note(&notes[0]).is_err());
        Ok(())
    }
}
