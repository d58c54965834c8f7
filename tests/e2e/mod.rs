//! End-to-end tests for the exec-assert binary
//!
//! These tests run the compiled binary and check its output and exit status.

pub mod cli;
pub mod helpers;
