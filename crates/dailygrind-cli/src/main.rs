use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dailygrind-cli", version, about = "DailyGrind CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Perform a contribution run
    Run(commands::run::RunArgs),
    /// Contribution statistics
    Stats {
        /// Workspace root (defaults to DAILYGRIND_ROOT or the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        /// Workspace root (defaults to DAILYGRIND_ROOT or the current directory)
        #[arg(long)]
        root: Option<PathBuf>,
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Scaffold a contribution workspace
    Init(commands::init::InitArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args),
        Commands::Stats { root, action } => commands::stats::run(action, root),
        Commands::Config { root, action } => commands::config::run(action, root),
        Commands::Init(args) => commands::init::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
