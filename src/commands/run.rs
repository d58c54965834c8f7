//! Run command - executes the configured test and prints its verdict

use anyhow::{Context, Result};
use colored::Colorize;

use crate::assertion::build_executor_asserter;
use crate::config::AssertionConfig;
use crate::report::{declaration, summarize, Summary};

/// Execute the test described by `config`.
///
/// Prints the declaration before running and the summary afterwards. Returns
/// whether every assertion held; an `Err` means the command could not be run.
pub fn execute(config: &AssertionConfig) -> Result<bool> {
    let mut asserter = build_executor_asserter(config);
    let declaration = declaration(config);
    print!("{declaration}");

    let result = asserter
        .execute_and_assert()
        .with_context(|| format!("command execution failed for `{}`", config.command))?;

    let summary = summarize(config.strategy, &declaration, &result, config.verbose);
    print_summary(&summary);

    Ok(summary.passed)
}

fn print_summary(summary: &Summary) {
    let headline = if summary.passed {
        summary.headline.green()
    } else {
        summary.headline.red()
    };
    println!("{headline}");
    print!("{}", summary.details);
}
