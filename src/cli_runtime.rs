use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fih::config::{Overrides, Settings};
use fih::model::User;
use fih::session::SessionStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "fih")]
#[command(about = "FIH social feed client", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding the session and config.json
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Override the auth endpoint URL
    #[arg(long, global = true, value_name = "URL")]
    auth_url: Option<String>,

    /// Override the posts endpoint URL
    #[arg(long, global = true, value_name = "URL")]
    posts_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let overrides = Overrides {
        data_dir: cli.data_dir,
        auth_url: cli.auth_url,
        posts_url: cli.posts_url,
    };
    let settings = Settings::resolve(&overrides)?;

    match cli.command {
        None => {
            fih::logging::init_file(&settings.log_path())?;
            fih::tui::run_with_options(fih::tui::TuiRunOptions { settings })?;
        }
        Some(command) => {
            fih::logging::init_stderr()?;
            crate::cli_exec::handle_command(&settings, command)?
        }
    }

    Ok(())
}

pub(crate) fn require_session(store: &SessionStore) -> Result<(User, String)> {
    store
        .read()?
        .into_active()
        .context("not logged in (run `fih login --username ... --password ...`)")
}
