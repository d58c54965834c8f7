//! The verdict printed after the command has run

use std::fmt;
use std::time::Duration;

use crate::assertion::asserter::AssertionResult;
use crate::assertion::records::split_records;
use crate::config::ExecutionStrategy;

/// Minimum width of the repeat-count column
const COUNT_COLUMN_WIDTH: usize = 2;
/// Width of the gap between the count column and the record text
const GAP_WIDTH: usize = 2;
const RUN_SEPARATOR: &str = "--";

/// Rendered outcome of a test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub passed: bool,
    /// First line, without its newline
    pub headline: String,
    /// Captured output, present when the test failed or verbose output was asked for
    pub details: String,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        write!(f, "{}", self.details)
    }
}

/// Summarize a finished test against the declaration printed before it ran
pub fn summarize(
    strategy: ExecutionStrategy,
    declaration: &str,
    result: &AssertionResult,
    verbose: bool,
) -> Summary {
    let passed = result.passed();
    let elapsed = seconds(result.duration);
    let declaration = declaration.trim_end_matches('\n');

    let headline = if passed {
        format!("SUCCESS after {elapsed}s: {declaration}")
    } else {
        format!(
            "FAILURE after {elapsed}s: {declaration}: {}",
            failure_reason(strategy, result)
        )
    };

    let mut details = String::new();
    if !passed || verbose {
        details.push_str(&stream_section(strategy, "stdout", &result.stdout));
        details.push_str(&stream_section(strategy, "stderr", &result.stderr));
    }

    Summary {
        passed,
        headline,
        details,
    }
}

fn seconds(duration: Duration) -> String {
    format!("{:.3}", duration.as_secs_f64())
}

fn failure_reason(strategy: ExecutionStrategy, result: &AssertionResult) -> String {
    match strategy {
        ExecutionStrategy::Until => {
            "the command timed out waiting for assertions to be met".to_string()
        }
        ExecutionStrategy::Once => {
            let mut reasons = Vec::new();
            if !result.result_assertion {
                reasons.push("the execution result assertion failed");
            }
            if !result.output_assertion {
                reasons.push("the execution output assertion(s) failed");
            }
            reasons.join("; ")
        }
    }
}

fn stream_section(strategy: ExecutionStrategy, stream: &str, text: &str) -> String {
    if text.is_empty() {
        return format!("Command did not output to {stream}.\n");
    }

    match strategy {
        ExecutionStrategy::Once => format!("Command output to {stream}:\n{text}\n"),
        ExecutionStrategy::Until => format!(
            "Command output to {stream}:\n{}",
            compress_records(&split_records(text))
        ),
    }
}

/// Render records with consecutive duplicates collapsed into counted runs.
///
/// ```text
/// 3x  first line
///   --
/// 1x  second line
///     continued
/// ```
pub fn compress_records(records: &[&str]) -> String {
    let mut runs: Vec<(&str, usize)> = Vec::new();
    for &record in records {
        if let Some((previous, count)) = runs.last_mut() {
            if *previous == record {
                *count += 1;
                continue;
            }
        }
        runs.push((record, 1));
    }

    let labels: Vec<String> = runs.iter().map(|(_, count)| format!("{count}x")).collect();
    let width = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(COUNT_COLUMN_WIDTH);
    let gap = " ".repeat(GAP_WIDTH);
    let indent = " ".repeat(width + GAP_WIDTH);

    let mut out = String::new();
    for (i, ((record, _), label)) in runs.iter().zip(&labels).enumerate() {
        let mut lines = record.split('\n');
        let first = lines.next().unwrap_or_default();
        out.push_str(&format!("{label:<width$}{gap}{first}\n"));
        for line in lines {
            out.push_str(&format!("{indent}{line}\n"));
        }

        if i + 1 < runs.len() {
            out.push_str(&" ".repeat(width));
            out.push_str(RUN_SEPARATOR);
            out.push('\n');
        }
    }
    out
}
