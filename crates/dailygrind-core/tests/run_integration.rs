//! Integration tests for the full contribution pipeline.
//!
//! Tests the whole workflow against a temporary workspace: daily file
//! creation, state persistence, journal entries, and README patching,
//! plus state continuity across consecutive runs.

use dailygrind_core::{Config, ContributionRunner, StateStore};
use tempfile::TempDir;

fn quiet_config(seed: u64) -> Config {
    let mut config = Config::default();
    config.pacing.enabled = false;
    config.run.seed = Some(seed);
    config
}

#[test]
fn test_full_run_produces_all_artifacts() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("README.md"),
        "# Activity\n\nTotal contributions: 0\nCurrent streak: 0 days\nLongest streak: 0 days\n",
    )
    .unwrap();

    let runner = ContributionRunner::new(dir.path(), quiet_config(11));
    let summary = runner.run(Some(4)).unwrap();

    // Daily files
    assert_eq!(summary.files_created.len(), 4);
    let daily_dir = dir.path().join("daily_contributions");
    assert!(daily_dir.is_dir());
    assert_eq!(std::fs::read_dir(&daily_dir).unwrap().count(), 4);

    // Persisted state
    let store = StateStore::new(dir.path(), &Config::default().files);
    let (stats, streak) = store.load().unwrap();
    assert_eq!(stats.total_contributions, 4);
    assert_eq!(streak.current_streak, 1);
    assert!(stats.last_contribution.is_some());

    // Journal carries one entry per event
    let journal = std::fs::read_to_string(dir.path().join("contribution_log.md")).unwrap();
    assert!(journal.starts_with("# Contribution Log"));
    assert_eq!(journal.matches("## Contribution on").count(), 4);
    assert!(journal.contains("- Total contributions: 4"));

    // README counters track the final state
    let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("Total contributions: 4"));
    assert!(readme.contains("Current streak: 1 days"));
    assert!(readme.contains("Longest streak: 1 days"));
}

#[test]
fn test_second_run_continues_totals() {
    let dir = TempDir::new().unwrap();
    let runner = ContributionRunner::new(dir.path(), quiet_config(5));

    runner.run(Some(2)).unwrap();
    let summary = runner.run(Some(3)).unwrap();

    assert_eq!(summary.stats.total_contributions, 5);
    // Same-day events never extend the streak past one
    assert_eq!(summary.streak.current_streak, 1);

    let journal = std::fs::read_to_string(dir.path().join("contribution_log.md")).unwrap();
    assert_eq!(journal.matches("## Contribution on").count(), 5);
}

#[test]
fn test_run_without_readme_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let runner = ContributionRunner::new(dir.path(), quiet_config(2));

    let summary = runner.run(Some(1)).unwrap();
    assert_eq!(summary.contributions_made, 1);
    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn test_custom_file_layout_is_respected() {
    let dir = TempDir::new().unwrap();
    let mut config = quiet_config(9);
    config.files.stats_file = "state/stats.json".into();
    config.files.streak_file = "state/streak.json".into();
    config.files.log_file = "log.md".into();
    config.files.daily_dir = "activity".into();
    std::fs::create_dir_all(dir.path().join("state")).unwrap();

    let runner = ContributionRunner::new(dir.path(), config.clone());
    runner.run(Some(2)).unwrap();

    assert!(dir.path().join("state/stats.json").exists());
    assert!(dir.path().join("state/streak.json").exists());
    assert!(dir.path().join("log.md").exists());
    assert!(dir.path().join("activity").is_dir());

    let store = StateStore::new(dir.path(), &config.files);
    let (stats, _) = store.load().unwrap();
    assert_eq!(stats.total_contributions, 2);
}

#[test]
fn test_malformed_state_restarts_from_zero() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("contribution_data.json"), "{broken").unwrap();
    std::fs::write(dir.path().join("streak_stats.json"), "[]").unwrap();

    let runner = ContributionRunner::new(dir.path(), quiet_config(4));
    let summary = runner.run(Some(1)).unwrap();

    assert_eq!(summary.stats.total_contributions, 1);
    assert_eq!(summary.streak.current_streak, 1);
    assert_eq!(summary.streak.longest_streak, 1);
}
