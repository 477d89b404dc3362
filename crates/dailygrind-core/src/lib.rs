//! # DailyGrind Core Library
//!
//! This library provides the core logic for DailyGrind, a contribution
//! cadence simulator. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary built on top of
//! this crate.
//!
//! ## Architecture
//!
//! - **Streak Tracker**: A pure state machine that derives updated
//!   contribution counters and streak state from the previous records
//!   and an explicitly injected calendar date
//! - **Storage**: Flat-JSON state persistence and TOML-based
//!   configuration, rooted at an explicit workspace directory
//! - **Generation**: Daily contribution files, an append-only journal,
//!   and best-effort README counter patching
//! - **Runner**: A seeded, paced batch driver that ties the above
//!   together for one contribution run
//!
//! ## Key Components
//!
//! - [`advance`]: Streak/statistics update state machine
//! - [`StateStore`]: Contribution and streak state persistence
//! - [`Config`]: Workspace configuration management
//! - [`ContributionRunner`]: Batch run driver

pub mod daily;
pub mod error;
pub mod journal;
pub mod readme;
pub mod runner;
pub mod storage;
pub mod streak;

pub use daily::DailyFileGenerator;
pub use error::{ConfigError, CoreError, StorageError};
pub use journal::Journal;
pub use readme::ReadmePatcher;
pub use runner::{ContributionRunner, RunSummary};
pub use storage::{Config, StateStore};
pub use streak::{advance, ContributionStats, StreakState};
