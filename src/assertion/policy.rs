//! Assertion policies
//!
//! Policies are plain configuration: what the caller expects of the command's
//! result and of its output. Testers are built from them.

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::ConfigError;

/// What to expect of the command's exit outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPolicy {
    RequireSuccess,
    RequireFailure,
    Ambivalent,
}

impl ResultPolicy {
    /// Whether this policy actually constrains the outcome
    pub fn is_meaningful(self) -> bool {
        self != ResultPolicy::Ambivalent
    }
}

impl fmt::Display for ResultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultPolicy::RequireSuccess => write!(f, "success"),
            ResultPolicy::RequireFailure => write!(f, "failure"),
            ResultPolicy::Ambivalent => write!(f, "ambivalent"),
        }
    }
}

impl FromStr for ResultPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(ResultPolicy::RequireSuccess),
            "failure" => Ok(ResultPolicy::RequireFailure),
            "ambivalent" => Ok(ResultPolicy::Ambivalent),
            _ => Err(ConfigError::UnknownResultPolicy(s.to_string())),
        }
    }
}

/// What to expect of the command's captured output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPolicy {
    RequireContains,
    RequireExcludes,
    Ambivalent,
}

impl OutputPolicy {
    pub fn is_meaningful(self) -> bool {
        self != OutputPolicy::Ambivalent
    }
}

impl fmt::Display for OutputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputPolicy::RequireContains => write!(f, "contains"),
            OutputPolicy::RequireExcludes => write!(f, "excludes"),
            OutputPolicy::Ambivalent => write!(f, "ambivalent"),
        }
    }
}

impl FromStr for OutputPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contains" => Ok(OutputPolicy::RequireContains),
            "excludes" => Ok(OutputPolicy::RequireExcludes),
            "ambivalent" => Ok(OutputPolicy::Ambivalent),
            _ => Err(ConfigError::UnknownOutputPolicy(s.to_string())),
        }
    }
}

/// An output policy paired with the pattern it applies
#[derive(Debug, Clone)]
pub struct OutputAssertion {
    pub policy: OutputPolicy,
    pub pattern: Regex,
}

impl OutputAssertion {
    pub fn new(policy: OutputPolicy, pattern: Regex) -> Self {
        Self { policy, pattern }
    }
}

/// The full set of assertions made about one command
#[derive(Debug, Clone)]
pub struct AssertionPolicy {
    pub result: ResultPolicy,
    pub outputs: Vec<OutputAssertion>,
}

impl AssertionPolicy {
    pub fn new(result: ResultPolicy, outputs: Vec<OutputAssertion>) -> Self {
        Self { result, outputs }
    }

    /// True when at least one output assertion is not ambivalent
    pub fn has_meaningful_output(&self) -> bool {
        self.outputs.iter().any(|o| o.policy.is_meaningful())
    }

    /// True when anything at all is being asserted
    pub fn is_meaningful(&self) -> bool {
        self.result.is_meaningful() || self.has_meaningful_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_policy_round_trips_names() {
        for name in ["success", "failure", "ambivalent"] {
            let policy: ResultPolicy = name.parse().unwrap();
            assert_eq!(policy.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_policies_are_rejected() {
        assert!(matches!(
            "Success".parse::<ResultPolicy>(),
            Err(ConfigError::UnknownResultPolicy(_))
        ));
        assert!(matches!(
            "include".parse::<OutputPolicy>(),
            Err(ConfigError::UnknownOutputPolicy(_))
        ));
    }

    #[test]
    fn test_meaningful_assertions() {
        let pattern = Regex::new("x").unwrap();

        let ambivalent = AssertionPolicy::new(
            ResultPolicy::Ambivalent,
            vec![OutputAssertion::new(OutputPolicy::Ambivalent, pattern.clone())],
        );
        assert!(!ambivalent.is_meaningful());

        let output_only = AssertionPolicy::new(
            ResultPolicy::Ambivalent,
            vec![
                OutputAssertion::new(OutputPolicy::Ambivalent, pattern.clone()),
                OutputAssertion::new(OutputPolicy::RequireExcludes, pattern),
            ],
        );
        assert!(output_only.has_meaningful_output());
        assert!(output_only.is_meaningful());

        let result_only = AssertionPolicy::new(ResultPolicy::RequireFailure, Vec::new());
        assert!(result_only.is_meaningful());
        assert!(!result_only.has_meaningful_output());
    }
}
