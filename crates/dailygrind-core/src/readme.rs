//! Best-effort README counter patching.
//!
//! The status document embeds the counters as plain text
//! (`Total contributions: N`, `Current streak: N days`,
//! `Longest streak: N days`). After each update the previous values are
//! textually replaced with the new ones. This is a best-effort patch: a
//! missing document or missing counter lines leave everything untouched.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::streak::{ContributionStats, StreakState};

/// Rewrites counter substrings in the status document.
pub struct ReadmePatcher {
    path: PathBuf,
}

impl ReadmePatcher {
    /// Create a patcher for `<root>/<status_file>`.
    pub fn new(root: &Path, status_file: &str) -> Self {
        Self {
            path: root.join(status_file),
        }
    }

    /// Replace the previous counter values with the current ones.
    ///
    /// The longest-streak line is only rewritten when the current
    /// streak has caught up with the longest, i.e. when this update may
    /// have raised it. Returns whether the document changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read or
    /// written.
    pub fn patch(
        &self,
        stats: &ContributionStats,
        streak: &StreakState,
    ) -> Result<bool, StorageError> {
        if !self.path.exists() {
            return Ok(false);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            StorageError::ReadFailed {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;

        let total = stats.total_contributions;
        let current = streak.current_streak;
        let longest = streak.longest_streak;

        let mut patched = content
            .replace(
                &format!("Total contributions: {}", total.saturating_sub(1)),
                &format!("Total contributions: {total}"),
            )
            .replace(
                &format!("Current streak: {} days", current.saturating_sub(1)),
                &format!("Current streak: {current} days"),
            );

        if current >= longest {
            patched = patched.replace(
                &format!("Longest streak: {} days", longest.saturating_sub(1)),
                &format!("Longest streak: {longest} days"),
            );
        }

        if patched == content {
            return Ok(false);
        }

        std::fs::write(&self.path, patched).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn records(total: u64, current: u32, longest: u32) -> (ContributionStats, StreakState) {
        (
            ContributionStats {
                total_contributions: total,
                last_contribution: None,
            },
            StreakState {
                current_streak: current,
                longest_streak: longest,
                start_date: None,
            },
        )
    }

    #[test]
    fn patches_all_counters_when_streak_leads() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("README.md"),
            "Total contributions: 4\nCurrent streak: 2 days\nLongest streak: 2 days\n",
        )
        .unwrap();

        let patcher = ReadmePatcher::new(dir.path(), "README.md");
        let (stats, streak) = records(5, 3, 3);
        assert!(patcher.patch(&stats, &streak).unwrap());

        let content = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(content.contains("Total contributions: 5"));
        assert!(content.contains("Current streak: 3 days"));
        assert!(content.contains("Longest streak: 3 days"));
    }

    #[test]
    fn longest_line_untouched_while_behind_record() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("README.md"),
            "Total contributions: 9\nCurrent streak: 0 days\nLongest streak: 6 days\n",
        )
        .unwrap();

        let patcher = ReadmePatcher::new(dir.path(), "README.md");
        let (stats, streak) = records(10, 1, 6);
        assert!(patcher.patch(&stats, &streak).unwrap());

        let content = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(content.contains("Current streak: 1 days"));
        assert!(content.contains("Longest streak: 6 days"));
    }

    #[test]
    fn missing_document_is_a_noop() {
        let dir = TempDir::new().unwrap();
        let patcher = ReadmePatcher::new(dir.path(), "README.md");
        let (stats, streak) = records(1, 1, 1);
        assert!(!patcher.patch(&stats, &streak).unwrap());
    }

    #[test]
    fn document_without_counters_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let original = "# My Project\n\nNothing to see here.\n";
        std::fs::write(dir.path().join("README.md"), original).unwrap();

        let patcher = ReadmePatcher::new(dir.path(), "README.md");
        let (stats, streak) = records(5, 3, 3);
        assert!(!patcher.patch(&stats, &streak).unwrap());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("README.md")).unwrap(),
            original
        );
    }
}
