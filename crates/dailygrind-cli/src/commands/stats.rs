use std::path::PathBuf;

use clap::Subcommand;
use dailygrind_core::{Config, StateStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Contribution and streak records
    Show,
    /// Streak record only
    Streak,
}

pub fn run(action: StatsAction, root: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let root = super::resolve_root(root);
    let config = Config::load(&root)?;
    let store = StateStore::new(&root, &config.files);
    let (stats, streak) = store.load()?;

    match action {
        StatsAction::Show => {
            let combined = serde_json::json!({
                "stats": stats,
                "streak": streak,
            });
            println!("{}", serde_json::to_string_pretty(&combined)?);
        }
        StatsAction::Streak => {
            println!("{}", serde_json::to_string_pretty(&streak)?);
        }
    }
    Ok(())
}
