//! Assertions over generated archive JSON.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the sessions archive holds exactly `expected` records.
pub fn assert_session_count(archive: &Value, expected: usize) -> Result<()> {
    let sessions = archive["sessions"]
        .as_array()
        .context("Expected 'sessions' array in archive")?;

    if sessions.len() != expected {
        anyhow::bail!("Expected {} sessions, got {}", expected, sessions.len());
    }

    Ok(())
}

/// Assert the memory archive entries have exactly these dates, in order.
pub fn assert_entry_dates(archive: &Value, expected: &[&str]) -> Result<()> {
    let entries = archive["entries"]
        .as_array()
        .context("Expected 'entries' array in archive")?;

    let dates = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry["date"]
                .as_str()
                .with_context(|| format!("Entry {} missing date", i))
        })
        .collect::<Result<Vec<_>>>()?;

    if dates != expected {
        anyhow::bail!("Expected entry dates {:?}, got {:?}", expected, dates);
    }

    Ok(())
}

/// Find a session record by its `(agent, sessionId)` key.
pub fn find_session<'a>(archive: &'a Value, agent: &str, session_id: &str) -> Result<&'a Value> {
    archive["sessions"]
        .as_array()
        .context("Expected 'sessions' array in archive")?
        .iter()
        .find(|s| s["agent"] == agent && s["sessionId"] == session_id)
        .with_context(|| format!("No session {}/{} in archive", agent, session_id))
}
