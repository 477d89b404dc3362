//! Daily contribution file generation.
//!
//! Each contribution event materializes as a timestamped markdown file
//! under the daily directory, carrying a quote drawn from a fixed pool.
//! The timestamp and the RNG are injected by the caller so generation
//! stays deterministic under a fixed seed.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use indoc::formatdoc;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::StorageError;

/// Quote pool for generated files.
pub const QUOTES: &[&str] = &[
    "The best way to predict the future is to create it.",
    "Success is not final, failure is not fatal: It is the courage to continue that counts.",
    "The only way to do great work is to love what you do.",
    "Believe you can and you're halfway there.",
    "It does not matter how slowly you go as long as you do not stop.",
    "Quality is not an act, it is a habit.",
    "The secret of getting ahead is getting started.",
    "Don't watch the clock; do what it does. Keep going.",
    "The future belongs to those who believe in the beauty of their dreams.",
    "You are never too old to set another goal or to dream a new dream.",
];

/// Pick a quote from the pool.
pub fn random_quote<R: Rng>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

/// Writes one markdown file per contribution event.
pub struct DailyFileGenerator {
    dir: PathBuf,
}

impl DailyFileGenerator {
    /// Create a generator writing into `<root>/<daily_dir>`.
    pub fn new(root: &Path, daily_dir: &str) -> Self {
        Self {
            dir: root.join(daily_dir),
        }
    }

    /// Create the contribution file for the given timestamp.
    ///
    /// The file is named `contribution_<YYYYMMDD_HHMMSS>.md`. If a file
    /// with that name already exists (two events within one second), a
    /// numeric suffix is appended rather than overwriting.
    ///
    /// # Errors
    ///
    /// Returns an error if the daily directory cannot be created or the
    /// file cannot be written.
    pub fn create(&self, stamp: NaiveDateTime, quote: &str) -> Result<PathBuf, StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::DirFailed {
            path: self.dir.clone(),
            message: e.to_string(),
        })?;

        let compact = stamp.format("%Y%m%d_%H%M%S").to_string();
        let path = self.unique_path(&compact);

        let content = formatdoc! {"
            # Daily Contribution - {compact}

            This file was automatically generated on {generated}.

            ## Random Quote

            > {quote}
            ",
            compact = compact,
            generated = stamp.format("%Y-%m-%d at %H:%M:%S"),
            quote = quote,
        };

        std::fs::write(&path, content).map_err(|e| StorageError::WriteFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(path)
    }

    fn unique_path(&self, compact: &str) -> PathBuf {
        let base = self.dir.join(format!("contribution_{compact}.md"));
        if !base.exists() {
            return base;
        }
        let mut n = 1u32;
        loop {
            let candidate = self.dir.join(format!("contribution_{compact}_{n}.md"));
            if !candidate.exists() {
                return candidate;
            }
            n += 1;
        }
    }
}
