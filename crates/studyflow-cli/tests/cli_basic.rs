//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data
//! directory and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "studyflow-cli", "--"])
        .args(args)
        .env("STUDYFLOW_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_plan_suggest() {
    let (stdout, _, code) = run_cli(&["plan", "suggest", "energetic", "high"]);
    assert_eq!(code, 0, "plan suggest failed");
    assert!(stdout.contains("Mathematics"));
    assert!(stdout.contains("Language Learning"));
}

#[test]
fn test_plan_suggest_unknown_labels() {
    let (stdout, _, code) = run_cli(&["plan", "suggest", "sleepy", "high"]);
    assert_eq!(code, 0, "unknown labels should not fail");
    let parsed: Vec<String> = serde_json::from_str(stdout.trim()).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_plan_generate() {
    let (stdout, _, code) = run_cli(&[
        "plan",
        "generate",
        "--mood",
        "energetic",
        "--energy",
        "high",
        "--time",
        "1-2",
        "--subject",
        "Mathematics",
        "--subject",
        "Physics",
    ]);
    assert_eq!(code, 0, "plan generate failed");

    let schedule: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    let blocks = schedule.as_array().unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["type"], "study");
    assert_eq!(blocks[0]["subject"], "Mathematics");
    assert_eq!(blocks[1]["type"], "break");
}

#[test]
fn test_plan_generate_requires_subjects() {
    let (_, _, code) = run_cli(&["plan", "generate", "--mood", "energetic", "--energy", "high"]);
    assert_ne!(code, 0, "generate without subjects should fail");
}

#[test]
fn test_plan_generate_rejects_unknown_mood() {
    let (_, stderr, code) = run_cli(&[
        "plan", "generate", "--mood", "sleepy", "--energy", "high", "--subject", "Math",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown mood"));
}

#[test]
fn test_plan_show_after_generate() {
    let _ = run_cli(&[
        "plan",
        "generate",
        "--mood",
        "focused",
        "--energy",
        "medium",
        "--subject",
        "Statistics",
    ]);
    let (stdout, _, code) = run_cli(&["plan", "show"]);
    assert_eq!(code, 0, "plan show failed");
    assert!(stdout.contains("plan_date"));
}

#[test]
fn test_session_lifecycle() {
    // A leftover active session from an earlier run is fine to discard.
    let _ = run_cli(&["session", "stop"]);

    let (stdout, _, code) = run_cli(&["session", "start", "Physics"]);
    assert_eq!(code, 0, "session start failed");
    assert!(stdout.contains("Physics"));

    let (stdout, _, code) = run_cli(&["session", "status"]);
    assert_eq!(code, 0, "session status failed");
    assert!(stdout.contains("Physics"));

    let (stdout, _, code) = run_cli(&["session", "stop"]);
    assert_eq!(code, 0, "session stop failed");
    assert!(stdout.contains("session recorded"));
}

#[test]
fn test_stats_summary() {
    let (stdout, _, code) = run_cli(&["stats", "summary"]);
    assert_eq!(code, 0, "stats summary failed");
    assert!(stdout.contains("total_study_time_minutes"));
    assert!(stdout.contains("week_activity"));
}

#[test]
fn test_stats_score() {
    let (stdout, _, code) = run_cli(&["stats", "score"]);
    assert_eq!(code, 0, "stats score failed");
    let score: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(score["score"].as_u64().unwrap() <= 100);
}

#[test]
fn test_stats_streak() {
    let (stdout, _, code) = run_cli(&["stats", "streak"]);
    assert_eq!(code, 0, "stats streak failed");
    assert!(stdout.contains("current_streak"));
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("planner"));
}

#[test]
fn test_config_get_set() {
    let (stdout, _, code) = run_cli(&["config", "get", "planner.start_hour"]);
    assert_eq!(code, 0, "config get failed");
    assert!(!stdout.trim().is_empty());

    let (stdout, _, code) = run_cli(&["config", "set", "planner.break_minutes", "10"]);
    assert_eq!(code, 0, "config set failed");
    assert!(stdout.contains("config updated"));

    let (_, _, code) = run_cli(&["config", "get", "planner.missing"]);
    assert_ne!(code, 0, "unknown key should fail");
}
