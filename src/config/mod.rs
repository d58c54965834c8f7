//! Test configuration
//!
//! Flags arrive as plain text in a [`RawConfig`]. [`AssertionConfig::from_raw`]
//! parses and validates all of it before anything runs, producing an immutable
//! value that the builder and the report both read from.

mod duration;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use regex::Regex;

pub use duration::parse_duration;

use crate::assertion::executor::DEFAULT_SHELL;
use crate::assertion::policy::{AssertionPolicy, OutputAssertion, OutputPolicy, ResultPolicy};
use crate::error::ConfigError;

pub const DEFAULT_STRATEGY: &str = "once";
pub const DEFAULT_RESULT: &str = "success";
pub const DEFAULT_OUTPUT: &str = "ambivalent";
pub const DEFAULT_TIMEOUT: &str = "60s";
pub const DEFAULT_INTERVAL: &str = "200ms";

/// Separator for the list of output policies
const OUTPUT_POLICY_SEPARATOR: char = ',';

/// How many times to run the command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Run once and judge that attempt
    Once,
    /// Re-run until the assertions hold or the timeout elapses
    Until,
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionStrategy::Once => write!(f, "once"),
            ExecutionStrategy::Until => write!(f, "until"),
        }
    }
}

impl FromStr for ExecutionStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "once" => Ok(ExecutionStrategy::Once),
            "until" => Ok(ExecutionStrategy::Until),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Flag values exactly as given on the command line
#[derive(Debug, Clone)]
pub struct RawConfig {
    pub command: String,
    pub strategy: String,
    pub result: String,
    /// Comma-separated output policies
    pub outputs: String,
    /// Output patterns, split on `delimiter` when it is non-empty
    pub tests: String,
    pub delimiter: String,
    pub timeout: String,
    pub interval: String,
    pub name: String,
    pub shell: String,
    pub verbose: bool,
}

impl RawConfig {
    /// Defaults for everything but the command
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            strategy: DEFAULT_STRATEGY.to_string(),
            result: DEFAULT_RESULT.to_string(),
            outputs: DEFAULT_OUTPUT.to_string(),
            tests: String::new(),
            delimiter: String::new(),
            timeout: DEFAULT_TIMEOUT.to_string(),
            interval: DEFAULT_INTERVAL.to_string(),
            name: String::new(),
            shell: DEFAULT_SHELL.to_string(),
            verbose: false,
        }
    }
}

/// Validated configuration for one test
#[derive(Debug, Clone)]
pub struct AssertionConfig {
    pub command: String,
    pub strategy: ExecutionStrategy,
    pub policy: AssertionPolicy,
    pub timeout: Duration,
    pub interval: Duration,
    /// Label printed ahead of the declaration
    pub name: Option<String>,
    pub shell: String,
    /// Print captured output even when the test passes
    pub verbose: bool,
}

impl AssertionConfig {
    /// Parse and validate raw flag values.
    ///
    /// Checks run in a fixed order so the first problem reported is stable:
    /// names and patterns first, then durations, then cross-field rules.
    pub fn from_raw(raw: &RawConfig) -> Result<Self, ConfigError> {
        let strategy: ExecutionStrategy = raw.strategy.parse()?;
        let result: ResultPolicy = raw.result.parse()?;

        let output_policies = raw
            .outputs
            .split(OUTPUT_POLICY_SEPARATOR)
            .map(str::parse::<OutputPolicy>)
            .collect::<Result<Vec<_>, _>>()?;

        let patterns = split_tests(&raw.tests, &raw.delimiter)
            .into_iter()
            .map(compile_pattern)
            .collect::<Result<Vec<_>, _>>()?;

        let timeout = parse_field("timeout", &raw.timeout)?;
        let interval = parse_field("interval", &raw.interval)?;
        if interval >= timeout {
            return Err(ConfigError::IntervalNotShorter { interval, timeout });
        }

        let awaits_something =
            result.is_meaningful() || output_policies.iter().any(|policy| policy.is_meaningful());
        if strategy == ExecutionStrategy::Until && !awaits_something {
            return Err(ConfigError::NothingToAwait);
        }

        if output_policies.len() != patterns.len() {
            return Err(ConfigError::MismatchedTests {
                assertions: output_policies.len(),
                tests: patterns.len(),
            });
        }

        let outputs = output_policies
            .into_iter()
            .zip(patterns)
            .map(|(policy, pattern)| OutputAssertion::new(policy, pattern))
            .collect();
        let policy = AssertionPolicy::new(result, outputs);

        Ok(Self {
            command: raw.command.clone(),
            strategy,
            policy,
            timeout,
            interval,
            name: Some(raw.name.clone()).filter(|name| !name.is_empty()),
            shell: raw.shell.clone(),
            verbose: raw.verbose,
        })
    }
}

fn split_tests<'a>(tests: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        vec![tests]
    } else {
        tests.split(delimiter).collect()
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Parse a duration flag, rejecting negative values
fn parse_field(field: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let trimmed = value.trim();
    let (negative, magnitude) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let duration = parse_duration(magnitude).map_err(|reason| ConfigError::MalformedDuration {
        field,
        value: value.to_string(),
        reason,
    })?;

    if negative && !duration.is_zero() {
        return Err(ConfigError::NegativeDuration {
            field,
            value: value.to_string(),
        });
    }
    Ok(duration)
}
