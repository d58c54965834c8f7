//! Tests for the command-line surface: flags, output and exit codes

use super::helpers::{exec_assert, stderr_of, stdout_of};
use serial_test::serial;

#[test]
fn test_passing_test_exits_zero() {
    let output = exec_assert(&["echo hello"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("executing `echo hello` once, expecting success\n"));
    assert!(stdout.contains("SUCCESS after "));
    assert!(!stdout.contains("Command output"));
}

#[test]
fn test_failing_assertion_exits_one() {
    let output = exec_assert(&["echo oops >&2; false"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("FAILURE after "));
    assert!(stdout.contains(": the execution result assertion failed\n"));
    assert!(stdout.contains("Command output to stderr:\noops\n"));
}

#[test]
fn test_expected_failure_exits_zero() {
    let output = exec_assert(&["--result", "failure", "false"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_named_verbose_run() {
    let output = exec_assert(&["--name", "greeting", "-v", "echo hi"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("greeting: executing `echo hi` once, expecting success\n"));
    assert!(stdout.contains("Command output to stdout:\nhi\n"));
    assert!(stdout.contains("Command did not output to stderr.\n"));
}

#[test]
fn test_multiple_output_assertions() {
    let output = exec_assert(&[
        "--output",
        "contains,excludes",
        "--test",
        "hello|error",
        "--delimiter",
        "|",
        "echo hello world",
    ]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with(concat!(
        "executing `echo hello world` once, expecting success ",
        "and output that contains `hello`, and doesn't contain `error`\n",
    )));
}

#[test]
#[serial]
fn test_until_times_out() {
    let output = exec_assert(&[
        "--execute",
        "until",
        "--timeout",
        "200ms",
        "--interval",
        "50ms",
        "echo pending; false",
    ]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.starts_with(
        "executing `echo pending; false` every 0.050s for 0.200s, or until success\n"
    ));
    assert!(stdout.contains(": the command timed out waiting for assertions to be met\n"));
    assert!(stdout.contains("x  pending\n"));
}

#[test]
fn test_unknown_result_policy_is_a_configuration_error() {
    let output = exec_assert(&["--result", "maybe", "true"]);
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr.starts_with("Error configuring test: unrecognized result assertion"));
}

#[test]
fn test_invalid_pattern_is_a_configuration_error() {
    let output = exec_assert(&["--output", "contains", "--test", "(", "true"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output)
        .starts_with("Error configuring test: failed to compile output test"));
}

#[test]
fn test_negative_timeout_is_a_configuration_error() {
    let output = exec_assert(&["--timeout", "-1s", "true"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("must be a non-negative duration"));
}

#[test]
fn test_until_without_assertions_is_a_configuration_error() {
    let output = exec_assert(&["--execute", "until", "--result", "ambivalent", "true"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("must provide at least one assertion"));
}

#[test]
fn test_missing_shell_is_an_execution_error() {
    let output = exec_assert(&["--shell", "/nonexistent/shell", "true"]);
    let stderr = stderr_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("Error executing: "));
    assert!(stderr.contains("/nonexistent/shell") || stderr.contains("failed to start"));
}

#[test]
fn test_missing_command_is_a_usage_error() {
    let output = exec_assert(&[]);
    assert_eq!(output.status.code(), Some(2));
}
