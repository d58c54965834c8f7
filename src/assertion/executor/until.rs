//! Repeated execution until assertions hold or a timeout elapses

use std::thread;
use std::time::{Duration, Instant};

use super::{Execution, Executor, OnceExecutor};
use crate::assertion::outcome::{CompoundOutcome, RunOutcome};
use crate::assertion::output_tester::{all_pass, LastRecord, OutputTester};
use crate::assertion::records::join_records;
use crate::assertion::result_tester::{LastAttempt, ResultTester};
use crate::error::ExecError;

/// Re-runs a single-attempt executor until the assertions hold.
///
/// The testers judge only the last attempt. At least one attempt always runs,
/// and the timeout is checked only after an attempt has finished, so a slow
/// attempt can overshoot the timeout by its own duration. No sleep follows the
/// final attempt.
pub struct UntilExecutor<E = OnceExecutor> {
    attempt: E,
    result_tester: LastAttempt<Box<dyn ResultTester>>,
    output_testers: Vec<LastRecord<Box<dyn OutputTester>>>,
    timeout: Duration,
    interval: Duration,
}

impl<E: Executor> UntilExecutor<E> {
    pub fn new(
        attempt: E,
        result_tester: Box<dyn ResultTester>,
        output_testers: Vec<Box<dyn OutputTester>>,
        timeout: Duration,
        interval: Duration,
    ) -> Self {
        Self {
            attempt,
            result_tester: LastAttempt::new(result_tester),
            output_testers: output_testers.into_iter().map(LastRecord::new).collect(),
            timeout,
            interval,
        }
    }

    fn assertions_hold(&self, history: &History) -> bool {
        self.result_tester.test(&history.outcome)
            && all_pass(
                &self.output_testers,
                history.last_stdout(),
                history.last_stderr(),
            )
    }
}

impl<E: Executor> Executor for UntilExecutor<E> {
    fn execute(&mut self) -> Result<Execution, ExecError> {
        let start = Instant::now();
        let mut history = History::start(self.attempt.execute()?);

        let met = loop {
            let met = self.assertions_hold(&history);
            let elapsed = start.elapsed();
            tracing::debug!(
                attempt = history.outcome.attempts(),
                outcome = %history.outcome.last(),
                met,
                elapsed_ms = elapsed.as_millis() as u64,
                "until attempt evaluated"
            );

            if met {
                break true;
            }
            if elapsed > self.timeout {
                break false;
            }

            thread::sleep(self.interval);
            history.record(self.attempt.execute()?);
        };

        let duration = start.elapsed();
        tracing::info!(
            attempts = history.outcome.attempts(),
            met,
            duration_ms = duration.as_millis() as u64,
            "until execution finished"
        );

        Ok(Execution {
            duration,
            stdout: join_records(&history.stdouts),
            stderr: join_records(&history.stderrs),
            outcome: history.outcome,
        })
    }
}

/// Everything observed so far; empty captures are not kept
struct History {
    outcome: RunOutcome,
    stdouts: Vec<String>,
    stderrs: Vec<String>,
}

impl History {
    fn start(first: Execution) -> Self {
        let mut history = Self {
            outcome: RunOutcome::Compound(CompoundOutcome::new(first.outcome.last().clone())),
            stdouts: Vec::new(),
            stderrs: Vec::new(),
        };
        history.keep_output(first);
        history
    }

    fn record(&mut self, attempt: Execution) {
        self.outcome.push_attempt(attempt.outcome.last().clone());
        self.keep_output(attempt);
    }

    /// Last non-empty stdout capture, the same text `last_record` yields
    /// from the joined history
    fn last_stdout(&self) -> &str {
        self.stdouts.last().map_or("", String::as_str)
    }

    fn last_stderr(&self) -> &str {
        self.stderrs.last().map_or("", String::as_str)
    }

    fn keep_output(&mut self, attempt: Execution) {
        if !attempt.stdout.is_empty() {
            self.stdouts.push(attempt.stdout);
        }
        if !attempt.stderr.is_empty() {
            self.stderrs.push(attempt.stderr);
        }
    }
}
