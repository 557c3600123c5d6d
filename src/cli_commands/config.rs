use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show config.json and the endpoints in effect
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Write endpoint URLs to config.json
    Set {
        /// Auth endpoint URL
        #[arg(long, value_name = "URL")]
        auth: Option<String>,
        /// Posts endpoint URL
        #[arg(long, value_name = "URL")]
        posts: Option<String>,
        /// Drop both URLs from config.json (back to defaults)
        #[arg(long, conflicts_with_all = ["auth", "posts"])]
        reset: bool,
    },
}
