//! Execute a shell command and assert something about its result and output.
//!
//! A command runs once, or repeatedly until its assertions hold. The result
//! assertion judges the exit outcome; output assertions search stdout and
//! stderr with regular expressions.

pub mod assertion;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
