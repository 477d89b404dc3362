use std::path::PathBuf;

use clap::Args;
use dailygrind_core::{Config, ContributionRunner};

#[derive(Args)]
pub struct RunArgs {
    /// Number of contribution events (overrides the configured range)
    #[arg(long)]
    pub count: Option<u32>,
    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,
    /// Skip the delays between events
    #[arg(long)]
    pub no_pacing: bool,
    /// Workspace root (defaults to DAILYGRIND_ROOT or the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

pub fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let root = super::resolve_root(args.root);
    let mut config = Config::load(&root)?;
    if let Some(seed) = args.seed {
        config.run.seed = Some(seed);
    }
    if args.no_pacing {
        config.pacing.enabled = false;
    }

    let runner = ContributionRunner::new(&root, config);
    let summary = runner.run(args.count)?;

    for path in &summary.files_created {
        println!("Created file: {}", path.display());
    }
    println!(
        "Made {} contributions successfully.",
        summary.contributions_made
    );
    println!("Current streak: {} days", summary.streak.current_streak);
    println!("Total contributions: {}", summary.stats.total_contributions);
    Ok(())
}
