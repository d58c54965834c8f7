//! Runs an executor and evaluates assertions against what it observed

use std::time::Duration;

use super::executor::{Execution, Executor};
use super::outcome::RunOutcome;
use super::output_tester::{all_pass, OutputTester};
use super::result_tester::ResultTester;
use crate::error::ExecError;

/// What happened, and whether the assertions held
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult {
    pub duration: Duration,
    pub outcome: RunOutcome,
    /// Whether the result tester passed
    pub result_assertion: bool,
    pub stdout: String,
    pub stderr: String,
    /// Whether every output tester passed
    pub output_assertion: bool,
}

impl AssertionResult {
    /// True when both the result and output assertions held
    pub fn passed(&self) -> bool {
        self.result_assertion && self.output_assertion
    }
}

/// Couples one executor with the testers that judge its execution.
///
/// The executor runs exactly once per call; repetition, if any, lives inside
/// the executor itself.
pub struct ExecutorAsserter {
    executor: Box<dyn Executor>,
    result_tester: Box<dyn ResultTester>,
    output_testers: Vec<Box<dyn OutputTester>>,
}

impl ExecutorAsserter {
    pub fn new(
        executor: Box<dyn Executor>,
        result_tester: Box<dyn ResultTester>,
        output_testers: Vec<Box<dyn OutputTester>>,
    ) -> Self {
        Self {
            executor,
            result_tester,
            output_testers,
        }
    }

    pub fn execute_and_assert(&mut self) -> Result<AssertionResult, ExecError> {
        let Execution {
            duration,
            outcome,
            stdout,
            stderr,
        } = self.executor.execute().inspect_err(|err| {
            tracing::warn!(error = %err, "command execution aborted");
        })?;

        let result_assertion = self.result_tester.test(&outcome);
        let output_assertion = all_pass(&self.output_testers, &stdout, &stderr);

        tracing::debug!(
            %outcome,
            result_assertion,
            output_assertion,
            "assertions evaluated"
        );

        Ok(AssertionResult {
            duration,
            outcome,
            result_assertion,
            stdout,
            stderr,
            output_assertion,
        })
    }
}
