//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "deadliner-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn status_of_past_target_reports_started() {
    let (stdout, _, code) = run_cli(&["status", "--target", "2001-01-01"]);
    assert_eq!(code, 0, "status failed");
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).expect("snapshot JSON");
    assert_eq!(snapshot["passed"], true);
    assert_eq!(snapshot["label"], "Started");
    assert_eq!(snapshot["total_secs"], 0);
}

#[test]
fn status_of_far_future_target_has_no_flags() {
    let (stdout, _, code) = run_cli(&["status", "--target", "2999-01-01"]);
    assert_eq!(code, 0, "status failed");
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).expect("snapshot JSON");
    assert_eq!(snapshot["passed"], false);
    assert_eq!(snapshot["approaching"], false);
    assert_eq!(snapshot["urgent"], false);
    assert_eq!(snapshot["imminent"], false);
}

#[test]
fn malformed_target_exits_nonzero() {
    let (_, stderr, code) = run_cli(&["status", "--target", "not-a-date"]);
    assert_ne!(code, 0, "malformed target should fail");
    assert!(stderr.contains("not-a-date"));
}

#[test]
fn watch_of_past_target_terminates_immediately() {
    let (stdout, _, code) = run_cli(&["watch", "--target", "2001-01-01"]);
    assert_eq!(code, 0, "watch failed");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "expected start + passed events: {stdout}");
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    let last: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(first["type"], "CountdownStarted");
    assert_eq!(last["type"], "TargetPassed");
}

#[test]
fn watch_of_near_target_always_ends_with_target_passed() {
    let target = (chrono::Utc::now() + chrono::TimeDelta::seconds(2))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();
    let (stdout, _, code) = run_cli(&["watch", "--target", &target]);
    assert_eq!(code, 0, "watch failed");
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.len() >= 2, "expected start and passed events: {stdout}");
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["type"], "CountdownStarted");
    // However the final snapshot lands relative to subscription, the
    // terminal event must still be emitted.
    let last: serde_json::Value = serde_json::from_str(lines.last().unwrap()).unwrap();
    assert_eq!(last["type"], "TargetPassed");
}

#[test]
fn config_show_prints_cadence() {
    let (stdout, _, code) = run_cli(&["config", "show"]);
    assert_eq!(code, 0, "config show failed");
    let config: serde_json::Value = serde_json::from_str(&stdout).expect("config JSON");
    assert!(config["cadence"]["imminent_secs"].is_u64());
}
