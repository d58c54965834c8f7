//! Outcomes of command attempts

use std::fmt;
use std::process::ExitStatus;

/// How a failed attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Exited with a non-zero status code
    Exited(i32),
    /// Killed by a signal
    Signaled(i32),
    /// The platform reported neither a code nor a signal
    Unknown,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Exited(code) => write!(f, "exit status {code}"),
            Termination::Signaled(signal) => write!(f, "terminated by signal {signal}"),
            Termination::Unknown => write!(f, "terminated abnormally"),
        }
    }
}

/// Result of a single attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command exited zero
    Ok,
    /// The command exited non-zero or died from a signal
    Failed(Termination),
}

impl Outcome {
    /// Classify a process exit status
    pub fn from_status(status: ExitStatus) -> Self {
        if status.success() {
            return Outcome::Ok;
        }

        if let Some(code) = status.code() {
            return Outcome::Failed(Termination::Exited(code));
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Outcome::Failed(Termination::Signaled(signal));
            }
        }

        Outcome::Failed(Termination::Unknown)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok)
    }

    pub fn is_failed(&self) -> bool {
        !self.is_ok()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok => write!(f, "success"),
            Outcome::Failed(termination) => write!(f, "{termination}"),
        }
    }
}

/// Chronological outcomes of every attempt in a multi-attempt run.
///
/// Never empty: the final attempt is held apart from the earlier ones, so
/// there is always a last outcome to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundOutcome {
    earlier: Vec<Outcome>,
    last: Outcome,
}

impl CompoundOutcome {
    /// Start a history with its first attempt
    pub fn new(first: Outcome) -> Self {
        Self {
            earlier: Vec::new(),
            last: first,
        }
    }

    /// Build from attempts in chronological order, or `None` if there were none
    pub fn from_attempts(mut attempts: Vec<Outcome>) -> Option<Self> {
        let last = attempts.pop()?;
        Some(Self {
            earlier: attempts,
            last,
        })
    }

    /// Append a later attempt
    pub fn push(&mut self, outcome: Outcome) {
        let previous = std::mem::replace(&mut self.last, outcome);
        self.earlier.push(previous);
    }

    /// Outcome of the chronologically final attempt
    pub fn last(&self) -> &Outcome {
        &self.last
    }

    /// All attempts in chronological order
    pub fn attempts(&self) -> impl Iterator<Item = &Outcome> {
        self.earlier.iter().chain(std::iter::once(&self.last))
    }

    /// Number of attempts
    pub fn len(&self) -> usize {
        self.earlier.len() + 1
    }

    /// Always false; present for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Outcome reported by an executor: one attempt or many
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Single(Outcome),
    Compound(CompoundOutcome),
}

impl RunOutcome {
    pub fn is_compound(&self) -> bool {
        matches!(self, RunOutcome::Compound(_))
    }

    /// Outcome of the chronologically last attempt, whichever shape this is
    pub fn last(&self) -> &Outcome {
        match self {
            RunOutcome::Single(outcome) => outcome,
            RunOutcome::Compound(compound) => compound.last(),
        }
    }

    /// Record a later attempt; a single outcome becomes a compound one
    pub fn push_attempt(&mut self, outcome: Outcome) {
        match self {
            RunOutcome::Compound(compound) => compound.push(outcome),
            RunOutcome::Single(first) => {
                let mut compound = CompoundOutcome::new(first.clone());
                compound.push(outcome);
                *self = RunOutcome::Compound(compound);
            }
        }
    }

    /// Number of attempts behind this outcome
    pub fn attempts(&self) -> usize {
        match self {
            RunOutcome::Single(_) => 1,
            RunOutcome::Compound(compound) => compound.len(),
        }
    }
}

impl From<Outcome> for RunOutcome {
    fn from(outcome: Outcome) -> Self {
        RunOutcome::Single(outcome)
    }
}

impl From<CompoundOutcome> for RunOutcome {
    fn from(compound: CompoundOutcome) -> Self {
        RunOutcome::Compound(compound)
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Single(outcome) => write!(f, "{outcome}"),
            RunOutcome::Compound(compound) => {
                write!(f, "{} after {} attempt(s)", compound.last(), compound.len())
            }
        }
    }
}
