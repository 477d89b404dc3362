use std::path::PathBuf;

use clap::Args;
use dailygrind_core::{Config, Journal, StateStore};

#[derive(Args)]
pub struct InitArgs {
    /// Workspace root (defaults to DAILYGRIND_ROOT or the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

pub fn run(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = super::resolve_root(args.root);
    std::fs::create_dir_all(&root)?;

    let config = Config::load(&root)?;
    if !root.join(Config::FILE_NAME).exists() {
        config.save(&root)?;
    }

    // Materialize the state documents so the layout is visible up front
    let store = StateStore::new(&root, &config.files);
    let (stats, streak) = store.load()?;
    store.save(&stats, &streak)?;

    Journal::new(&root, &config.files.log_file).ensure()?;

    let readme = root.join(&config.files.status_file);
    if !readme.exists() {
        let content = format!(
            "# Daily Contributions\n\n\
             Automated contribution activity for this repository.\n\n\
             ## Stats\n\n\
             - Total contributions: {}\n\
             - Current streak: {} days\n\
             - Longest streak: {} days\n",
            stats.total_contributions, streak.current_streak, streak.longest_streak,
        );
        std::fs::write(&readme, content)?;
    }

    println!("initialized workspace at {}", root.display());
    Ok(())
}
