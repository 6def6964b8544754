use crate::Result;
use kontrol_providers::{
    AgentSessions, MetadataIndex, SessionLogFile, discover_agents, discover_session_logs,
    scan_session_log,
};
use kontrol_types::{SessionArchive, SessionRecord, SessionStatus};
use std::path::{Path, PathBuf};

/// Builds the sessions archive from `<agents_root>/<agent>/sessions/*.jsonl`
#[derive(Debug, Clone)]
pub struct SessionArchiveBuilder {
    agents_root: PathBuf,
}

impl SessionArchiveBuilder {
    pub fn new(agents_root: impl Into<PathBuf>) -> Self {
        Self {
            agents_root: agents_root.into(),
        }
    }

    pub fn agents_root(&self) -> &Path {
        &self.agents_root
    }

    /// Assemble the archive document; `generated_at` also drives liveness.
    pub fn build(&self, generated_at: i64) -> Result<SessionArchive> {
        Ok(SessionArchive {
            generated_at,
            sessions: self.collect(generated_at)?,
        })
    }

    /// One record per session log, agents in name order, logs newest first
    pub fn collect(&self, generated_at: i64) -> Result<Vec<SessionRecord>> {
        let mut records = Vec::new();

        for agent in discover_agents(&self.agents_root)? {
            let metadata = load_metadata(&agent);
            let logs = discover_session_logs(&agent.sessions_dir)?;
            tracing::debug!(
                agent = %agent.agent,
                sessions = logs.len(),
                metadata_records = metadata.len(),
                "scanning agent sessions"
            );

            for log in logs {
                records.push(build_record(&agent.agent, &log, &metadata, generated_at)?);
            }
        }

        Ok(records)
    }
}

/// Unreadable or malformed index: logged, then treated as empty
fn load_metadata(agent: &AgentSessions) -> MetadataIndex {
    match MetadataIndex::load(&agent.sessions_dir) {
        Ok(index) => index,
        Err(err) => {
            tracing::warn!(
                agent = %agent.agent,
                error = %err,
                "ignoring unreadable session metadata index"
            );
            MetadataIndex::default()
        }
    }
}

fn build_record(
    agent: &str,
    log: &SessionLogFile,
    metadata: &MetadataIndex,
    generated_at: i64,
) -> Result<SessionRecord> {
    let scan = scan_session_log(&log.path)?;
    tracing::debug!(
        agent,
        session_id = %log.session_id,
        lines = scan.lines_scanned,
        ignored = scan.lines_ignored,
        messages = scan.message_count,
        "scanned session log"
    );

    let (label, spawned_by) = metadata
        .lookup(&log.session_id)
        .map(|meta| (meta.label.clone(), meta.spawned_by.clone()))
        .unwrap_or_default();

    Ok(SessionRecord {
        session_id: log.session_id.clone(),
        agent: agent.to_string(),
        label,
        spawned_by,
        started_at: scan.started_at,
        updated_at: log.updated_at,
        model: scan.model,
        message_count: scan.message_count,
        first_message: scan.first_message,
        status: SessionStatus::classify(log.updated_at, generated_at),
        messages: scan.messages,
    })
}
