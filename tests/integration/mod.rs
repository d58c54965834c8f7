//! Integration tests for exec-assert
//!
//! These tests drive the library API against real shell commands, from raw
//! flag values through the builder to the rendered summary.

pub mod helpers;
pub mod once;
pub mod until;
