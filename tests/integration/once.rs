//! Single-execution tests

use super::helpers::{config_for, run_test};

#[test]
fn test_echo_hello_succeeds() {
    let config = config_for("echo hello", |_| {});
    let (result, report) = run_test(&config);

    assert!(result.result_assertion);
    assert!(result.output_assertion);
    assert_eq!(result.stdout, "hello");
    assert_eq!(result.stderr, "");
    assert!(report.starts_with("SUCCESS after "));
    assert!(report.ends_with(": executing `echo hello` once, expecting success\n"));
}

#[test]
fn test_false_with_failure_assertion() {
    let config = config_for("false", |raw| raw.result = "failure".to_string());
    let (result, _) = run_test(&config);

    assert!(result.passed());
}

#[test]
fn test_output_searched_in_both_streams() {
    let config = config_for("echo hello; echo world >&2", |raw| {
        raw.outputs = "contains".to_string();
        raw.tests = "[Dd]".to_string();
    });
    let (result, _) = run_test(&config);

    assert!(result.output_assertion);
}

#[test]
fn test_one_failing_output_assertion_fails_the_test() {
    let config = config_for("echo hello; echo world >&2", |raw| {
        raw.outputs = "contains,excludes".to_string();
        raw.tests = "hello,world".to_string();
        raw.delimiter = ",".to_string();
    });
    let (result, report) = run_test(&config);

    assert!(result.result_assertion);
    assert!(!result.output_assertion);
    assert!(report.contains(": the execution output assertion(s) failed\n"));
    assert!(report.contains("Command output to stdout:\nhello\n"));
    assert!(report.contains("Command output to stderr:\nworld\n"));
}

#[test]
fn test_failure_report_shows_missing_output() {
    let config = config_for("exit 3", |_| {});
    let (result, report) = run_test(&config);

    assert!(!result.result_assertion);
    assert!(report.contains(": the execution result assertion failed\n"));
    assert!(
        report.ends_with("Command did not output to stdout.\nCommand did not output to stderr.\n")
    );
}

#[test]
fn test_verbose_success_shows_output() {
    let config = config_for("echo visible", |raw| raw.verbose = true);
    let (_, report) = run_test(&config);

    assert!(report.contains("Command output to stdout:\nvisible\n"));
}
