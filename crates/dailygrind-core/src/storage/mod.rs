mod config;
mod state;

pub use config::{Config, FilesConfig, PacingConfig, RunConfig};
pub use state::StateStore;

use std::path::PathBuf;

/// Returns the workspace root directory.
///
/// Set DAILYGRIND_ROOT to operate on a repository other than the
/// current directory.
pub fn workspace_root() -> PathBuf {
    std::env::var("DAILYGRIND_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}
