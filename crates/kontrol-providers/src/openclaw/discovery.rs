use crate::Result;
use kontrol_types::system_time_to_millis;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::SESSION_LOG_EXTENSION;

/// An agent directory that has a `sessions/` subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSessions {
    /// Agent identifier (the agent directory name)
    pub agent: String,
    pub sessions_dir: PathBuf,
}

/// One session log found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLogFile {
    /// Filename with the `.jsonl` suffix removed
    pub session_id: String,
    pub path: PathBuf,
    /// File mtime in epoch milliseconds
    pub updated_at: i64,
}

/// Enumerate `<agents_root>/<agent>/sessions/` directories, sorted by agent name.
///
/// Hidden agent directories are skipped. A missing `agents_root` yields no agents.
pub fn discover_agents(agents_root: &Path) -> Result<Vec<AgentSessions>> {
    if !agents_root.is_dir() {
        return Ok(Vec::new());
    }

    let mut agents = Vec::new();
    for entry in shallow_entries(agents_root) {
        let entry = entry?;
        if is_hidden(&entry) {
            continue;
        }

        let sessions_dir = entry.path().join("sessions");
        if !sessions_dir.is_dir() {
            continue;
        }

        agents.push(AgentSessions {
            agent: entry.file_name().to_string_lossy().into_owned(),
            sessions_dir,
        });
    }

    Ok(agents)
}

/// Enumerate `*.jsonl` session logs in a sessions directory.
///
/// Ordered most recently modified first; equal mtimes fall back to filename order.
pub fn discover_session_logs(sessions_dir: &Path) -> Result<Vec<SessionLogFile>> {
    let mut logs = Vec::new();

    for entry in shallow_entries(sessions_dir) {
        let entry = entry?;
        if is_hidden(&entry) || !entry.path().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let Some(session_id) = file_name
            .strip_suffix(SESSION_LOG_EXTENSION)
            .and_then(|stem| stem.strip_suffix('.'))
        else {
            continue;
        };

        // Follows symlinks, unlike DirEntry::metadata
        let modified = std::fs::metadata(entry.path())?.modified()?;

        logs.push(SessionLogFile {
            session_id: session_id.to_string(),
            path: entry.path().to_path_buf(),
            updated_at: system_time_to_millis(modified),
        });
    }

    // Entries arrive in filename order; the stable sort keeps it for ties
    logs.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    Ok(logs)
}

pub(crate) fn shallow_entries(dir: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
}

pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
