//! Flat-JSON persistence for contribution and streak state.
//!
//! Two documents live at the workspace root:
//! - `contribution_data.json` -- running totals and last contribution day
//! - `streak_stats.json` -- current/longest streak and streak start
//!
//! Both are rewritten in full after each update. A missing or
//! unparseable document is replaced by the zero-state default; absence
//! is not an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::FilesConfig;
use crate::streak::{ContributionStats, StreakState};

/// Reads and writes the two state documents under a workspace root.
pub struct StateStore {
    stats_path: PathBuf,
    streak_path: PathBuf,
}

impl StateStore {
    /// Create a store for the given workspace root and file layout.
    pub fn new(root: &Path, files: &FilesConfig) -> Self {
        Self {
            stats_path: root.join(&files.stats_file),
            streak_path: root.join(&files.streak_file),
        }
    }

    /// Load both records, substituting defaults where a document is
    /// missing or malformed.
    ///
    /// # Errors
    ///
    /// Returns an error only for read failures other than the file not
    /// existing (e.g. permissions).
    pub fn load(&self) -> Result<(ContributionStats, StreakState), StorageError> {
        let stats = Self::read_or_default(&self.stats_path)?;
        let streak = Self::read_or_default(&self.streak_path)?;
        Ok((stats, streak))
    }

    /// Persist both records as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if either document cannot be written.
    pub fn save(
        &self,
        stats: &ContributionStats,
        streak: &StreakState,
    ) -> Result<(), StorageError> {
        Self::write_json(&self.stats_path, stats)?;
        Self::write_json(&self.streak_path, streak)?;
        Ok(())
    }

    fn read_or_default<T>(path: &Path) -> Result<T, StorageError>
    where
        T: Default + serde::de::DeserializeOwned,
    {
        match std::fs::read_to_string(path) {
            // Malformed content falls back to the zero-state
            Ok(content) => Ok(serde_json::from_str(&content).unwrap_or_default()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(StorageError::ReadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(value).map_err(|e| {
            StorageError::WriteFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        std::fs::write(path, content).map_err(|e| StorageError::WriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
