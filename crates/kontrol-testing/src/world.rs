//! TestWorld pattern for declarative archive test setup.

use anyhow::Result;
use assert_cmd::Command;
use filetime::FileTime;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated OpenClaw data root plus an output directory.
///
/// # Example
/// ```no_run
/// use kontrol_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new();
/// world
///     .write_session("main", "s1", &[fixtures::message_line("user", "hi")])
///     .unwrap();
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    root: PathBuf,
    output_dir: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create `<tmp>/openclaw/{agents,workspace/memory}`; the output dir is left absent.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("openclaw");
        let output_dir = temp_dir.path().join("public");

        std::fs::create_dir_all(root.join("agents")).expect("Failed to create agents dir");
        std::fs::create_dir_all(root.join("workspace").join("memory"))
            .expect("Failed to create memory dir");

        Self {
            temp_dir,
            root,
            output_dir,
        }
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The OpenClaw data root (`--root`)
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn agents_root(&self) -> PathBuf {
        self.root.join("agents")
    }

    pub fn memory_dir(&self) -> PathBuf {
        self.root.join("workspace").join("memory")
    }

    /// Archive destination (`--output-dir`)
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create (if needed) and return an agent's sessions directory.
    pub fn sessions_dir(&self, agent: &str) -> PathBuf {
        let dir = self.agents_root().join(agent).join("sessions");
        std::fs::create_dir_all(&dir).expect("Failed to create sessions dir");
        dir
    }

    /// Builder-style agent creation.
    pub fn with_agent(self, agent: &str) -> Self {
        self.sessions_dir(agent);
        self
    }

    /// Write `<agent>/sessions/<session_id>.jsonl`, one line per item.
    pub fn write_session<S: AsRef<str>>(
        &self,
        agent: &str,
        session_id: &str,
        lines: &[S],
    ) -> Result<PathBuf> {
        let mut body = String::new();
        for line in lines {
            body.push_str(line.as_ref());
            body.push('\n');
        }
        self.write_session_bytes(agent, session_id, body.as_bytes())
    }

    pub fn write_session_bytes(
        &self,
        agent: &str,
        session_id: &str,
        bytes: &[u8],
    ) -> Result<PathBuf> {
        let path = self.sessions_dir(agent).join(format!("{}.jsonl", session_id));
        std::fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Write the agent's `sessions.json` metadata index.
    pub fn write_metadata(&self, agent: &str, index: &Value) -> Result<PathBuf> {
        let path = self.sessions_dir(agent).join("sessions.json");
        std::fs::write(&path, serde_json::to_string_pretty(index)?)?;
        Ok(path)
    }

    /// Write a memory note under `workspace/memory/`.
    pub fn write_memory(&self, filename: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.memory_dir().join(filename);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Pin a file's mtime to an epoch-millisecond instant.
    pub fn set_mtime_millis(&self, path: &Path, millis: i64) -> Result<()> {
        let seconds = millis.div_euclid(1000);
        let nanos = (millis.rem_euclid(1000) * 1_000_000) as u32;
        filetime::set_file_mtime(path, FileTime::from_unix_time(seconds, nanos))?;
        Ok(())
    }

    pub fn sessions_archive_path(&self) -> PathBuf {
        self.output_dir.join("sessions-archive.json")
    }

    pub fn memory_archive_path(&self) -> PathBuf {
        self.output_dir.join("memory-archive.json")
    }

    pub fn read_sessions_archive(&self) -> Result<Value> {
        read_json(&self.sessions_archive_path())
    }

    pub fn read_memory_archive(&self) -> Result<Value> {
        read_json(&self.memory_archive_path())
    }

    /// Point a command at this world and shield it from the host environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.env_remove("KONTROL_ROOT")
            .env_remove("KONTROL_OUTPUT_DIR")
            .env_remove("RUST_LOG")
            .env("KONTROL_CONFIG", self.temp_dir.path().join("config.toml"))
            .arg("--root")
            .arg(&self.root)
            .arg("--output-dir")
            .arg(&self.output_dir)
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
