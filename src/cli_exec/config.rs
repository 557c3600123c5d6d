use super::*;

use fih::config::{read_config, write_config};
use fih::model::ClientConfig;

pub(super) fn handle_config_command(settings: &Settings, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let file = read_config(&settings.data_dir)?;
            if json {
                print_json(
                    &serde_json::json!({
                        "data_dir": settings.data_dir,
                        "file": file,
                        "effective": settings.endpoints,
                    }),
                    "config",
                )?;
            } else {
                println!("data_dir: {}", settings.data_dir.display());
                println!("auth_url: {}", settings.endpoints.auth_url);
                println!("posts_url: {}", settings.endpoints.posts_url);
            }
        }
        ConfigCommands::Set { auth, posts, reset } => {
            let mut cfg = if reset {
                ClientConfig::default()
            } else {
                read_config(&settings.data_dir)?
            };
            if auth.is_none() && posts.is_none() && !reset {
                anyhow::bail!("nothing to set (pass --auth, --posts or --reset)");
            }
            if auth.is_some() {
                cfg.auth_url = auth;
            }
            if posts.is_some() {
                cfg.posts_url = posts;
            }
            write_config(&settings.data_dir, &cfg)?;
            println!("Config updated");
        }
    }
    Ok(())
}
