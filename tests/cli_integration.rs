//! Integration tests for the `qd` CLI.
//!
//! Each test creates a temp data directory, runs `qd` as a subprocess,
//! and verifies stdout and/or file contents.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `qd` binary.
fn qd_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("qd");
    path
}

fn qd(root: &Path, args: &[&str]) -> std::process::Output {
    Command::new(qd_bin())
        .arg("-C")
        .arg(root)
        .args(args)
        .output()
        .expect("failed to run qd")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn init_board(root: &Path) {
    let output = qd(root, &["init"]);
    assert!(output.status.success(), "init failed: {output:?}");
}

#[test]
fn init_creates_data_dir_and_config() {
    let dir = TempDir::new().unwrap();
    init_board(dir.path());
    assert!(dir.path().join(".quad").is_dir());
    assert!(dir.path().join(".quad/config.toml").exists());

    // Second init is a friendly no-op
    let output = qd(dir.path(), &["init"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("already"));
}

#[test]
fn commands_fail_cleanly_without_a_board() {
    let dir = TempDir::new().unwrap();
    let output = qd(dir.path(), &["board"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("qd init"), "stderr was: {stderr}");
}

#[test]
fn add_then_board_shows_task_in_urgent_important() {
    let dir = TempDir::new().unwrap();
    init_board(dir.path());

    let output = qd(dir.path(), &["add", "Buy milk"]);
    assert!(output.status.success(), "add failed: {output:?}");

    let output = qd(dir.path(), &["board"]);
    let text = stdout(&output);
    assert!(text.contains("Urgent & Important"));
    assert!(text.contains("Buy milk"));

    // Persisted to the tasks blob
    let blob = std::fs::read_to_string(dir.path().join(".quad/tasks.json")).unwrap();
    assert!(blob.contains("\"urgent_important\""));
}

#[test]
fn add_rejects_empty_title() {
    let dir = TempDir::new().unwrap();
    init_board(dir.path());
    let output = qd(dir.path(), &["add", "   "]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("empty"));
}

#[test]
fn mv_and_list_json_round_trip() {
    let dir = TempDir::new().unwrap();
    init_board(dir.path());
    qd(dir.path(), &["add", "Report"]);

    let output = qd(dir.path(), &["list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let id = tasks[0]["id"].as_i64().unwrap();
    assert_eq!(tasks[0]["bucket"], "urgent_important");

    let output = qd(dir.path(), &["mv", &id.to_string(), "low"]);
    assert!(output.status.success());

    let output = qd(dir.path(), &["list", "low", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(tasks[0]["id"].as_i64().unwrap(), id);
    assert_eq!(tasks[0]["bucket"], "low");
}

#[test]
fn done_toggles_and_reports_unknown_ids() {
    let dir = TempDir::new().unwrap();
    init_board(dir.path());
    qd(dir.path(), &["add", "Buy milk"]);

    let output = qd(dir.path(), &["list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let id = tasks[0]["id"].as_i64().unwrap();

    let output = qd(dir.path(), &["done", &id.to_string()]);
    assert!(stdout(&output).contains("is now done"));

    // Unknown id: exit 0, informative message, nothing corrupted
    let output = qd(dir.path(), &["done", "12345"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("no task"));
}

#[test]
fn label_lifecycle_via_cli() {
    let dir = TempDir::new().unwrap();
    init_board(dir.path());

    let output = qd(dir.path(), &["label", "add", "Work", "--color", "#4dd0e1"]);
    assert!(output.status.success(), "label add failed: {output:?}");

    // Duplicate is rejected
    let output = qd(dir.path(), &["label", "add", "Work"]);
    assert!(!output.status.success());

    qd(dir.path(), &["add", "Report", "--label", "Work"]);

    let output = qd(dir.path(), &["label", "rm", "Work"]);
    assert!(stdout(&output).contains("1 task(s) unlabeled"));

    let output = qd(dir.path(), &["label", "list", "--json"]);
    let labels: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(labels.as_array().unwrap().len(), 0);

    // The task reverted to the sentinel: no label field in the blob
    let output = qd(dir.path(), &["list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!(tasks[0].get("label").is_none());
}

#[test]
fn label_palette_lists_thirteen_swatches() {
    let dir = TempDir::new().unwrap();
    init_board(dir.path());
    let output = qd(dir.path(), &["label", "palette"]);
    assert_eq!(stdout(&output).lines().count(), 13);
}
