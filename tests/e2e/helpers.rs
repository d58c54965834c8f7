//! Test helper functions for E2E tests

use std::process::{Command, Output};

/// Runs the exec-assert binary with the given arguments
pub fn exec_assert(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_exec-assert"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run exec-assert")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
