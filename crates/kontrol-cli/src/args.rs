use crate::types::{LogFormat, LogLevel};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "kontrol-archive")]
#[command(
    about = "Generate the sessions and memory archives for the Mission Kontrol dashboard",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// OpenClaw data root containing agents/ and workspace/memory/ [default: /data/.openclaw]
    #[arg(long)]
    pub root: Option<String>,

    /// Directory the archives are written to
    #[arg(long)]
    pub output_dir: Option<String>,

    /// TOML config file [default: <config dir>/kontrol/config.toml]
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    #[arg(long, default_value = "plain")]
    pub log_format: LogFormat,

    /// Pretty-print archive JSON
    #[arg(long)]
    pub pretty: bool,

    /// Fail the run when a memory note cannot be read
    #[arg(long)]
    pub strict_memory: bool,
}
