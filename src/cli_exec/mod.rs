use anyhow::{Context, Result};

use fih::config::Settings;

use crate::{Commands, ConfigCommands};

mod config;
mod feed;
mod session;

pub(crate) fn handle_command(settings: &Settings, command: Commands) -> Result<()> {
    match command {
        Commands::Register(args) => session::handle_register_command(settings, args),
        Commands::Login(args) => session::handle_login_command(settings, args),
        Commands::Logout => session::handle_logout_command(settings),
        Commands::Whoami(args) => session::handle_whoami_command(settings, args.json),
        Commands::Feed(args) => feed::handle_feed_command(settings, args),
        Commands::Post(args) => feed::handle_post_command(settings, args),
        Commands::Like(args) => feed::handle_like_command(settings, args),
        Commands::Config { command } => config::handle_config_command(settings, command),
    }
}

fn print_json<T: serde::Serialize>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}
