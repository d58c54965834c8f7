//! Testers for the captured output of a command
//!
//! Patterns are searched for, not matched against the whole stream: a match
//! anywhere in stdout or stderr counts.

use regex::Regex;

use super::policy::{OutputAssertion, OutputPolicy};
use super::records::last_record;

/// Decides whether captured stdout and stderr satisfy an assertion
pub trait OutputTester {
    fn test(&self, stdout: &str, stderr: &str) -> bool;
}

impl<T: OutputTester + ?Sized> OutputTester for Box<T> {
    fn test(&self, stdout: &str, stderr: &str) -> bool {
        (**self).test(stdout, stderr)
    }
}

/// Passes when the pattern matches stdout or stderr
#[derive(Debug, Clone)]
pub struct ContainsTester {
    pattern: Regex,
}

impl ContainsTester {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl OutputTester for ContainsTester {
    fn test(&self, stdout: &str, stderr: &str) -> bool {
        self.pattern.is_match(stdout) || self.pattern.is_match(stderr)
    }
}

/// Passes when the pattern matches neither stdout nor stderr
#[derive(Debug, Clone)]
pub struct ExcludesTester {
    pattern: Regex,
}

impl ExcludesTester {
    pub fn new(pattern: Regex) -> Self {
        Self { pattern }
    }
}

impl OutputTester for ExcludesTester {
    fn test(&self, stdout: &str, stderr: &str) -> bool {
        !self.pattern.is_match(stdout) && !self.pattern.is_match(stderr)
    }
}

/// Passes everything
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbivalentTester;

impl OutputTester for AmbivalentTester {
    fn test(&self, _stdout: &str, _stderr: &str) -> bool {
        true
    }
}

/// Feeds the inner tester only the last record of each aggregated stream.
///
/// Stdout and stderr are split independently, so they may come from different
/// attempts when one stream was silent on the final attempt.
#[derive(Debug, Clone)]
pub struct LastRecord<T> {
    inner: T,
}

impl<T: OutputTester> LastRecord<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: OutputTester> OutputTester for LastRecord<T> {
    fn test(&self, stdout: &str, stderr: &str) -> bool {
        self.inner.test(last_record(stdout), last_record(stderr))
    }
}

/// Build the tester for one output assertion
pub fn output_tester(assertion: &OutputAssertion) -> Box<dyn OutputTester> {
    match assertion.policy {
        OutputPolicy::RequireContains => Box::new(ContainsTester::new(assertion.pattern.clone())),
        OutputPolicy::RequireExcludes => Box::new(ExcludesTester::new(assertion.pattern.clone())),
        OutputPolicy::Ambivalent => Box::new(AmbivalentTester),
    }
}

/// Build one tester per output assertion, in order
pub fn output_testers(assertions: &[OutputAssertion]) -> Vec<Box<dyn OutputTester>> {
    assertions.iter().map(output_tester).collect()
}

/// Wrap each tester so it only sees the last record of each stream
pub fn last_record_testers(testers: Vec<Box<dyn OutputTester>>) -> Vec<Box<dyn OutputTester>> {
    testers
        .into_iter()
        .map(|tester| Box::new(LastRecord::new(tester)) as Box<dyn OutputTester>)
        .collect()
}

/// Every tester must pass; an empty set passes
pub fn all_pass<T: OutputTester>(testers: &[T], stdout: &str, stderr: &str) -> bool {
    testers.iter().all(|tester| tester.test(stdout, stderr))
}
