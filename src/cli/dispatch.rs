use anyhow::{Context, Result};
use exec_assert::commands::run;
use exec_assert::config::AssertionConfig;

use super::types::Cli;

/// Validate the configuration and run the test, returning whether it passed
pub fn dispatch(cli: Cli) -> Result<bool> {
    let raw = cli.into_raw_config();
    let config = AssertionConfig::from_raw(&raw).context("Error configuring test")?;
    run::execute(&config).context("Error executing")
}
