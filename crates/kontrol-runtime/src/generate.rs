use crate::config::ArchiveConfig;
use crate::ops::{MemoryArchiveBuilder, SessionArchiveBuilder};
use crate::writer::write_archive;
use crate::Result;
use std::fmt;
use std::path::PathBuf;

/// Source of generation timestamps (epoch milliseconds)
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        kontrol_types::now_millis()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Outcome of one archive run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub sessions: usize,
    pub memory_entries: usize,
    pub sessions_path: PathBuf,
    pub memory_path: PathBuf,
}

impl fmt::Display for GenerateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated: {} sessions, {} memory entries",
            self.sessions, self.memory_entries
        )
    }
}

/// Rebuild both archives using wall-clock time
pub fn generate(config: &ArchiveConfig) -> Result<GenerateReport> {
    generate_with_clock(config, &SystemClock)
}

/// Rebuild both archives.
///
/// The sessions archive is written before the memory archive is built; a
/// failure in between leaves a fresh sessions archive next to a stale memory
/// archive. Concurrent runs against the same output directory are not guarded.
pub fn generate_with_clock(config: &ArchiveConfig, clock: &dyn Clock) -> Result<GenerateReport> {
    let policy = config.redaction_policy()?;
    std::fs::create_dir_all(&config.output_dir)?;
    let generated_at = clock.now_millis();

    let sessions = SessionArchiveBuilder::new(config.agents_root()).build(generated_at)?;
    let sessions_path = config.sessions_path();
    write_archive(&sessions_path, &sessions, &policy, config.pretty)?;
    tracing::info!(
        path = %sessions_path.display(),
        sessions = sessions.sessions.len(),
        "wrote sessions archive"
    );

    let memory = MemoryArchiveBuilder::new(config.memory_dir())
        .strict(config.strict_memory)
        .build(generated_at)?;
    let memory_path = config.memory_path();
    write_archive(&memory_path, &memory, &policy, config.pretty)?;
    tracing::info!(
        path = %memory_path.display(),
        entries = memory.entries.len(),
        "wrote memory archive"
    );

    Ok(GenerateReport {
        sessions: sessions.sessions.len(),
        memory_entries: memory.entries.len(),
        sessions_path,
        memory_path,
    })
}
