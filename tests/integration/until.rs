//! Repeated-execution tests

use std::time::Duration;

use serial_test::serial;
use tempfile::TempDir;

use super::helpers::{config_for, run_test};

#[test]
#[serial]
fn test_waits_for_a_file_to_appear() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let marker = temp.path().join("ready");

    // The first attempt creates the marker in the background
    let command = format!(
        concat!(
            "if [ -e {0} ]; then echo ready; ",
            "else (sleep 0.1; touch {0}) >/dev/null 2>&1 & echo waiting; exit 1; fi",
        ),
        marker.display()
    );
    let config = config_for(&command, |raw| {
        raw.strategy = "until".to_string();
        raw.outputs = "contains".to_string();
        raw.tests = "^ready$".to_string();
        raw.interval = "20ms".to_string();
        raw.timeout = "10s".to_string();
    });

    let (result, report) = run_test(&config);

    assert!(result.passed(), "{report}");
    assert!(result.outcome.attempts() >= 2);
    assert!(report.starts_with("SUCCESS after "));
}

#[test]
#[serial]
fn test_always_failing_command_times_out() {
    let config = config_for("echo not yet; exit 1", |raw| {
        raw.strategy = "until".to_string();
        raw.interval = "50ms".to_string();
        raw.timeout = "200ms".to_string();
    });

    let (result, report) = run_test(&config);

    assert!(!result.result_assertion);
    assert!(result.duration >= Duration::from_millis(200));
    assert!(result.outcome.attempts() > 1);
    assert!(result.outcome.last().is_failed());

    let attempts = result.outcome.attempts();
    assert!(report.contains(": the command timed out waiting for assertions to be met\n"));
    assert!(report.contains(&format!("Command output to stdout:\n{attempts}x  not yet\n")));
    assert!(report.contains("Command did not output to stderr.\n"));
}

#[test]
#[serial]
fn test_until_failure_stops_at_first_failure() {
    let config = config_for("false", |raw| {
        raw.strategy = "until".to_string();
        raw.result = "failure".to_string();
        raw.interval = "10ms".to_string();
        raw.timeout = "5s".to_string();
    });

    let (result, _) = run_test(&config);

    assert!(result.passed());
    assert_eq!(result.outcome.attempts(), 1);
}
