//! Append-only contribution journal.
//!
//! Human-readable markdown log of every contribution event. The file is
//! created with its header on first use and only ever appended to
//! afterwards.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::StorageError;
use crate::streak::{ContributionStats, StreakState};

const HEADER: &str = "# Contribution Log\n\n";

/// Appends contribution entries to the journal file.
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Create a journal at `<root>/<log_file>`.
    pub fn new(root: &Path, log_file: &str) -> Self {
        Self {
            path: root.join(log_file),
        }
    }

    /// Create the journal file with its header if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn ensure(&self) -> Result<(), StorageError> {
        if !self.path.exists() {
            std::fs::write(&self.path, HEADER).map_err(|e| StorageError::WriteFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Append one entry recording the counters after an update.
    ///
    /// # Errors
    ///
    /// Returns an error if the journal cannot be created or appended to.
    pub fn append(
        &self,
        stamp: NaiveDateTime,
        stats: &ContributionStats,
        streak: &StreakState,
    ) -> Result<(), StorageError> {
        let io_err = |e: std::io::Error| StorageError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        };

        self.ensure()?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;

        write!(
            file,
            "\n## Contribution on {}\n\
             - Total contributions: {}\n\
             - Current streak: {} days\n\
             - Longest streak: {} days\n",
            stamp.format("%Y-%m-%d %H:%M:%S"),
            stats.total_contributions,
            streak.current_streak,
            streak.longest_streak,
        )
        .map_err(io_err)?;
        Ok(())
    }
}
