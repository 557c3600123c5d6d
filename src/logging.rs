use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FIH_LOG";

fn filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Command-line mode: log to stderr, quiet unless `FIH_LOG` says otherwise.
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install stderr logger: {e}"))
}

/// Shell mode: the terminal belongs to the UI, so logs go to a file.
pub fn init_file(path: &Path) -> Result<()> {
    let dir = path
        .parent()
        .context("log path has no parent directory")?;
    let name = path
        .file_name()
        .context("log path has no file name")?;
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, name);
    tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install file logger: {e}"))
}
