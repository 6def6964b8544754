use crate::redact::{REDACTION_MARKER, RedactionPolicy, RedactionRule};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "KONTROL_CONFIG";
/// Environment variable overriding `openclaw_root`
pub const ROOT_ENV: &str = "KONTROL_ROOT";
/// Environment variable overriding `output_dir`
pub const OUTPUT_DIR_ENV: &str = "KONTROL_OUTPUT_DIR";

const DEFAULT_OPENCLAW_ROOT: &str = "/data/.openclaw";
const DEFAULT_OUTPUT_DIR: &str = "/data/.openclaw/workspace/mission-kontrol/public";

/// Extra pattern appended after the built-in redaction rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionRuleConfig {
    pub name: String,
    /// Regular expression (`regex` crate syntax)
    pub pattern: String,
    /// Replacement text; `$1`/`${name}` refer to capture groups
    #[serde(default = "default_replacement")]
    pub replacement: String,
}

fn default_replacement() -> String {
    REDACTION_MARKER.to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionConfig {
    #[serde(default)]
    pub rules: Vec<RedactionRuleConfig>,
}

/// Paths and switches for one archive run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// OpenClaw data root containing `agents/` and `workspace/memory/`
    pub openclaw_root: PathBuf,
    /// Directory the dashboard serves archives from
    pub output_dir: PathBuf,
    pub sessions_file: String,
    pub memory_file: String,
    /// Abort the run when a memory note cannot be read
    pub strict_memory: bool,
    /// Pretty-print archive JSON
    pub pretty: bool,
    pub redaction: RedactionConfig,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            openclaw_root: PathBuf::from(DEFAULT_OPENCLAW_ROOT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sessions_file: "sessions-archive.json".to_string(),
            memory_file: "memory-archive.json".to_string(),
            strict_memory: false,
            pretty: false,
            redaction: RedactionConfig::default(),
        }
    }
}

/// Command-line overrides; `None`/`false` leaves the loaded value alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<String>,
    pub openclaw_root: Option<String>,
    pub output_dir: Option<String>,
    pub strict_memory: bool,
    pub pretty: bool,
}

impl ArchiveConfig {
    /// Build the effective configuration.
    ///
    /// Priority per field: explicit override > environment variable > config file > default.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve_with_env(overrides, |key| std::env::var(key).ok())
    }

    pub fn resolve_with_env<F>(overrides: &ConfigOverrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path = overrides
            .config_path
            .clone()
            .or_else(|| env(CONFIG_ENV))
            .map(|p| expand_tilde(&p))
            .or_else(Self::default_path);

        let mut config = match config_path {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        if let Some(root) = env(ROOT_ENV) {
            config.openclaw_root = expand_tilde(&root);
        }
        if let Some(output_dir) = env(OUTPUT_DIR_ENV) {
            config.output_dir = expand_tilde(&output_dir);
        }

        if let Some(root) = &overrides.openclaw_root {
            config.openclaw_root = expand_tilde(root);
        }
        if let Some(output_dir) = &overrides.output_dir {
            config.output_dir = expand_tilde(output_dir);
        }
        config.strict_memory |= overrides.strict_memory;
        config.pretty |= overrides.pretty;

        Ok(config)
    }

    /// Load a TOML config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: ArchiveConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `<config dir>/kontrol/config.toml`, when the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kontrol").join("config.toml"))
    }

    pub fn agents_root(&self) -> PathBuf {
        self.openclaw_root.join("agents")
    }

    pub fn memory_dir(&self) -> PathBuf {
        self.openclaw_root.join("workspace").join("memory")
    }

    pub fn sessions_path(&self) -> PathBuf {
        self.output_dir.join(&self.sessions_file)
    }

    pub fn memory_path(&self) -> PathBuf {
        self.output_dir.join(&self.memory_file)
    }

    /// Built-in rules followed by the configured extras, in file order
    pub fn redaction_policy(&self) -> Result<RedactionPolicy> {
        let mut policy = RedactionPolicy::default();
        for rule in &self.redaction.rules {
            policy.push(RedactionRule::new(
                &rule.name,
                &rule.pattern,
                &rule.replacement,
            )?);
        }
        Ok(policy)
    }
}

/// Expand a leading `~/` to the home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
