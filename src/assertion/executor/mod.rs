//! Command executors
//!
//! An executor runs the command according to its strategy and reports what
//! happened. Only infrastructure problems are errors; a command that exits
//! non-zero is a normal [`Execution`] with a failed outcome.

mod once;
mod until;

use std::time::Duration;

pub use once::{OnceExecutor, DEFAULT_SHELL};
pub use until::UntilExecutor;

use super::outcome::RunOutcome;
use crate::error::ExecError;

/// What an executor observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Wall-clock time spent executing
    pub duration: Duration,
    pub outcome: RunOutcome,
    /// Captured stdout, aggregated across attempts when there were several
    pub stdout: String,
    /// Captured stderr, aggregated across attempts when there were several
    pub stderr: String,
}

/// Runs a command using some execution strategy
pub trait Executor {
    fn execute(&mut self) -> Result<Execution, ExecError>;
}

impl<T: Executor + ?Sized> Executor for Box<T> {
    fn execute(&mut self) -> Result<Execution, ExecError> {
        (**self).execute()
    }
}
