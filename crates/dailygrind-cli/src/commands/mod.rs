pub mod config;
pub mod init;
pub mod run;
pub mod stats;

use std::path::PathBuf;

/// Resolve the workspace root: explicit flag first, then the
/// DAILYGRIND_ROOT environment variable, then the current directory.
pub fn resolve_root(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(dailygrind_core::storage::workspace_root)
}
