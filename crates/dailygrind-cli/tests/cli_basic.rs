//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against per-test temporary
//! workspace roots and verify outputs.

use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "dailygrind-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_init_scaffolds_workspace() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    let (stdout, _, code) = run_cli(&["init", "--root", root]);
    assert_eq!(code, 0, "init failed");
    assert!(stdout.contains("initialized workspace"));

    assert!(dir.path().join("dailygrind.toml").exists());
    assert!(dir.path().join("contribution_data.json").exists());
    assert!(dir.path().join("streak_stats.json").exists());
    assert!(dir.path().join("contribution_log.md").exists());

    let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("Total contributions: 0"));
    assert!(readme.contains("Current streak: 0 days"));
}

#[test]
fn test_run_performs_contributions() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();
    run_cli(&["init", "--root", root]);

    let (stdout, _, code) = run_cli(&[
        "run", "--root", root, "--count", "2", "--seed", "1", "--no-pacing",
    ]);
    assert_eq!(code, 0, "run failed");
    assert!(stdout.contains("Made 2 contributions successfully."));
    assert!(stdout.contains("Total contributions: 2"));

    let daily = dir.path().join("daily_contributions");
    assert!(daily.is_dir());
    assert_eq!(std::fs::read_dir(&daily).unwrap().count(), 2);

    let readme = std::fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("Total contributions: 2"));
}

#[test]
fn test_stats_show_outputs_json() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();
    run_cli(&["init", "--root", root]);
    run_cli(&[
        "run", "--root", root, "--count", "1", "--seed", "2", "--no-pacing",
    ]);

    let (stdout, _, code) = run_cli(&["stats", "--root", root, "show"]);
    assert_eq!(code, 0, "stats show failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["stats"]["total_contributions"], 1);
    assert_eq!(parsed["streak"]["current_streak"], 1);
}

#[test]
fn test_stats_streak_outputs_record() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    let (stdout, _, code) = run_cli(&["stats", "--root", root, "streak"]);
    assert_eq!(code, 0, "stats streak failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["current_streak"], 0);
    assert_eq!(parsed["longest_streak"], 0);
}

#[test]
fn test_config_get_and_set() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    let (stdout, _, code) = run_cli(&["config", "--root", root, "get", "run.contributions_min"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "20");

    let (_, _, code) = run_cli(&["config", "--root", root, "set", "run.contributions_min", "5"]);
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(&["config", "--root", root, "get", "run.contributions_min"]);
    assert_eq!(stdout.trim(), "5");
}

#[test]
fn test_config_list_is_json() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    let (stdout, _, code) = run_cli(&["config", "--root", root, "list"]);
    assert_eq!(code, 0);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["pacing"]["enabled"], true);
    assert_eq!(parsed["files"]["log_file"], "contribution_log.md");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().to_str().unwrap();

    let (_, stderr, code) = run_cli(&["config", "--root", root, "get", "run.bogus"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}
