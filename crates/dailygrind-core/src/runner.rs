//! Batch contribution run driver.
//!
//! Ties the pieces together for one run: draws the event count from the
//! configured range, then for every event creates a daily file, advances
//! the streak records, persists them, journals the result, and patches
//! the README counters. Events are paced with a uniform random delay
//! when pacing is enabled.
//!
//! The RNG is a seedable PCG so a fixed seed reproduces the whole run
//! (count, quotes, delays).

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

use crate::daily::{random_quote, DailyFileGenerator};
use crate::error::Result;
use crate::journal::Journal;
use crate::readme::ReadmePatcher;
use crate::storage::{Config, StateStore};
use crate::streak::{advance, ContributionStats, StreakState};

/// Outcome of one contribution run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of contribution events performed
    pub contributions_made: u32,
    /// Daily files created, in order
    pub files_created: Vec<PathBuf>,
    /// Final statistics after the run
    pub stats: ContributionStats,
    /// Final streak state after the run
    pub streak: StreakState,
}

/// Driver for a batch of contribution events against one workspace.
pub struct ContributionRunner {
    root: PathBuf,
    config: Config,
}

impl ContributionRunner {
    /// Create a runner for the given workspace root.
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Workspace root this runner operates on.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Perform one contribution run.
    ///
    /// `count_override` fixes the number of events instead of drawing
    /// from the configured range.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or any file
    /// operation fails; events performed before the failure remain on
    /// disk and in the persisted state.
    pub fn run(&self, count_override: Option<u32>) -> Result<RunSummary> {
        self.config.validate()?;

        let mut rng = match self.config.run.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };

        let count = match count_override {
            Some(n) => n,
            None => rng.gen_range(
                self.config.run.contributions_min..=self.config.run.contributions_max,
            ),
        };

        let store = StateStore::new(&self.root, &self.config.files);
        let (mut stats, mut streak) = store.load()?;
        let mut files_created = Vec::with_capacity(count as usize);

        for i in 0..count {
            let now = Local::now().naive_local();
            let path = self.step(&store, &mut stats, &mut streak, now, &mut rng)?;
            files_created.push(path);

            if self.config.pacing.enabled && i + 1 < count {
                let delay_ms =
                    rng.gen_range(self.config.pacing.min_ms..=self.config.pacing.max_ms);
                thread::sleep(Duration::from_millis(delay_ms));
            }
        }

        Ok(RunSummary {
            contributions_made: count,
            files_created,
            stats,
            streak,
        })
    }

    /// Perform one contribution event at an explicit timestamp.
    ///
    /// Creates the daily file, advances the records with the event's
    /// calendar day, persists them, appends the journal entry, and
    /// patches the README counters.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the file operations fail.
    pub fn step<R: Rng>(
        &self,
        store: &StateStore,
        stats: &mut ContributionStats,
        streak: &mut StreakState,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Result<PathBuf> {
        let generator = DailyFileGenerator::new(&self.root, &self.config.files.daily_dir);
        let path = generator.create(now, random_quote(rng))?;

        let (new_stats, new_streak) = advance(stats, streak, now.date());
        *stats = new_stats;
        *streak = new_streak;

        store.save(stats, streak)?;
        Journal::new(&self.root, &self.config.files.log_file).append(now, stats, streak)?;
        ReadmePatcher::new(&self.root, &self.config.files.status_file).patch(stats, streak)?;

        Ok(path)
    }
}
