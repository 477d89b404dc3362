use std::path::PathBuf;

use clap::Subcommand;
use dailygrind_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "run.contributions_min", "pacing.enabled")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction, root: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let root = super::resolve_root(root);
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(&root)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(&root)?;
            config.set(&key, &value)?;
            config.save(&root)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load(&root)?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save(&root)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
