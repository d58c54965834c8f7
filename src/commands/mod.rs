//! Command implementations behind the CLI

pub mod run;
