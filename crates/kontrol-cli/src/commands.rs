use crate::args::Cli;
use crate::logging::init_logging;
use anyhow::{Context, Result};
use kontrol_runtime::{ArchiveConfig, ConfigOverrides, generate};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level, cli.log_format);

    let overrides = ConfigOverrides {
        config_path: cli.config,
        openclaw_root: cli.root,
        output_dir: cli.output_dir,
        strict_memory: cli.strict_memory,
        pretty: cli.pretty,
    };
    let config = ArchiveConfig::resolve(&overrides).context("failed to load configuration")?;
    tracing::debug!(
        root = %config.openclaw_root.display(),
        output_dir = %config.output_dir.display(),
        "resolved configuration"
    );

    let report = generate(&config).with_context(|| {
        format!(
            "failed to generate archives in {}",
            config.output_dir.display()
        )
    })?;

    println!("{}", report);
    Ok(())
}
