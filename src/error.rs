//! Error types
//!
//! Two classes of failure are errors here. `ExecError` means the command could
//! not be run at all; `ConfigError` means the configuration was rejected before
//! anything ran. A command that runs and does not meet its assertions is not an
//! error: that is reported through the boolean fields of the assertion result.

use std::time::Duration;

/// Infrastructure failure while running one attempt of the command.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The shell could not be started.
    #[error("failed to start command execution for `{command}`: {source}")]
    SpawnFailed {
        command: String,
        source: std::io::Error,
    },

    /// A standard stream was not attached to the child.
    #[error("failed to attach to {stream} pipe for `{command}`")]
    PipeUnavailable {
        command: String,
        stream: &'static str,
    },

    /// Draining a standard stream failed.
    #[error("failed to read from {stream} for `{command}`: {source}")]
    ReadFailed {
        command: String,
        stream: &'static str,
        source: std::io::Error,
    },

    /// The reader for a stream went away before delivering its contents.
    #[error("{stream} reader for `{command}` exited before delivering output")]
    ReaderLost {
        command: String,
        stream: &'static str,
    },

    /// Waiting for the child to exit failed.
    #[error("failed to wait for `{command}`: {source}")]
    WaitFailed {
        command: String,
        source: std::io::Error,
    },
}

/// Configuration rejected before any execution.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unrecognized execution strategy: got {0:?}, expected one of once, until")]
    UnknownStrategy(String),

    #[error(
        "unrecognized result assertion: got {0:?}, expected one of success, failure, ambivalent"
    )]
    UnknownResultPolicy(String),

    #[error(
        "unrecognized output assertion: got {0:?}, expected one of contains, excludes, ambivalent"
    )]
    UnknownOutputPolicy(String),

    #[error("failed to compile output test {pattern:?} to regular expression: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("invalid {field} duration {value:?}: {reason}")]
    MalformedDuration {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("execution {field} must be a non-negative duration, got {value:?}")]
    NegativeDuration { field: &'static str, value: String },

    #[error(
        "execution interval must be shorter than the execution timeout: interval {interval:?}, timeout {timeout:?}"
    )]
    IntervalNotShorter {
        interval: Duration,
        timeout: Duration,
    },

    #[error(
        "the number of output assertions and output tests don't match: {assertions} assertion(s), {tests} test(s)"
    )]
    MismatchedTests { assertions: usize, tests: usize },

    #[error("if executing with strategy \"until\", must provide at least one assertion")]
    NothingToAwait,
}
