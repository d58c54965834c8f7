//! Testers for the exit outcome of a command

use super::outcome::{Outcome, RunOutcome};
use super::policy::ResultPolicy;

/// Decides whether a run's outcome satisfies an assertion
pub trait ResultTester {
    fn test(&self, outcome: &RunOutcome) -> bool;
}

impl<T: ResultTester + ?Sized> ResultTester for Box<T> {
    fn test(&self, outcome: &RunOutcome) -> bool {
        (**self).test(outcome)
    }
}

/// Passes only a single successful attempt.
///
/// A compound outcome is never a plain success; wrap the tester in
/// [`LastAttempt`] to judge the final attempt of a multi-attempt run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessTester;

impl ResultTester for SuccessTester {
    fn test(&self, outcome: &RunOutcome) -> bool {
        matches!(outcome, RunOutcome::Single(Outcome::Ok))
    }
}

/// Passes anything that is not a single successful attempt
#[derive(Debug, Clone, Copy, Default)]
pub struct FailureTester;

impl ResultTester for FailureTester {
    fn test(&self, outcome: &RunOutcome) -> bool {
        !SuccessTester.test(outcome)
    }
}

/// Passes everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbivalentTester;

impl ResultTester for AmbivalentTester {
    fn test(&self, _outcome: &RunOutcome) -> bool {
        true
    }
}

/// Feeds the inner tester only the outcome of the last attempt.
///
/// Used for repeated execution: a run that failed ten times and then succeeded
/// reads as a success because the final attempt succeeded.
#[derive(Debug, Clone)]
pub struct LastAttempt<T> {
    inner: T,
}

impl<T: ResultTester> LastAttempt<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: ResultTester> ResultTester for LastAttempt<T> {
    fn test(&self, outcome: &RunOutcome) -> bool {
        match outcome {
            RunOutcome::Single(_) => self.inner.test(outcome),
            RunOutcome::Compound(compound) => {
                self.inner.test(&RunOutcome::Single(compound.last().clone()))
            }
        }
    }
}

/// Build the tester for a result policy
pub fn result_tester(policy: ResultPolicy) -> Box<dyn ResultTester> {
    match policy {
        ResultPolicy::RequireSuccess => Box::new(SuccessTester),
        ResultPolicy::RequireFailure => Box::new(FailureTester),
        ResultPolicy::Ambivalent => Box::new(AmbivalentTester),
    }
}
