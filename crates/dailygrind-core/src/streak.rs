//! Contribution counters and streak state machine.
//!
//! This module implements the update rule for contribution statistics
//! and day-streak state. The current date is injected explicitly, which
//! keeps [`advance`] a pure function: the caller decides what "today"
//! means, and persistence stays the caller's responsibility.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Running contribution statistics.
///
/// Serialized to/from `contribution_data.json` (dates as `YYYY-MM-DD`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionStats {
    /// Total contribution events recorded, across all days
    pub total_contributions: u64,
    /// Calendar day of the most recent contribution, if any
    pub last_contribution: Option<NaiveDate>,
}

/// Day-streak state derived from contribution history.
///
/// Serialized to/from `streak_stats.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive days with at least one contribution, ending today or
    /// yesterday
    pub current_streak: u32,
    /// Longest streak ever observed
    pub longest_streak: u32,
    /// First day of the current streak, if one is running
    pub start_date: Option<NaiveDate>,
}

/// Record one contribution event on `today` and return the updated
/// records.
///
/// Update rule:
/// - the total count always increments;
/// - a contribution on the day after the last one (or the very first
///   contribution) extends the streak, starting it if it was at zero;
/// - a contribution after a gap of two or more days resets the streak
///   to 1 and restarts `start_date`;
/// - a repeat contribution on the same day leaves streak fields
///   untouched.
///
/// Invariants: `longest_streak >= current_streak` holds after every
/// call; `total_contributions` never decreases; `start_date` is set
/// exactly when the streak leaves zero and stays fixed while it runs.
pub fn advance(
    stats: &ContributionStats,
    streak: &StreakState,
    today: NaiveDate,
) -> (ContributionStats, StreakState) {
    let yesterday = today - Duration::days(1);

    let mut stats = stats.clone();
    let mut streak = streak.clone();

    stats.total_contributions += 1;

    if stats.last_contribution.is_none() || stats.last_contribution == Some(yesterday) {
        // Continuing streak or first contribution
        if streak.current_streak == 0 {
            streak.start_date = Some(today);
        }
        streak.current_streak += 1;
        if streak.current_streak > streak.longest_streak {
            streak.longest_streak = streak.current_streak;
        }
    } else if stats.last_contribution != Some(today) {
        // Streak broken
        streak.current_streak = 1;
        streak.start_date = Some(today);
    }
    // last_contribution == today: repeat event, streak fields unchanged

    stats.last_contribution = Some(today);

    (stats, streak)
}
