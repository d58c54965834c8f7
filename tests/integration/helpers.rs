//! Test helper functions for integration tests

use exec_assert::assertion::{build_executor_asserter, AssertionResult};
use exec_assert::config::{AssertionConfig, RawConfig};
use exec_assert::report::{declaration, summarize};

/// Build a validated configuration from defaults plus adjustments
pub fn config_for(command: &str, configure: impl FnOnce(&mut RawConfig)) -> AssertionConfig {
    let mut raw = RawConfig::new(command);
    configure(&mut raw);
    AssertionConfig::from_raw(&raw).expect("configuration should be valid")
}

/// Run the configured test, returning the result and the rendered report
pub fn run_test(config: &AssertionConfig) -> (AssertionResult, String) {
    let declaration = declaration(config);
    let result = build_executor_asserter(config)
        .execute_and_assert()
        .expect("command should run");
    let summary = summarize(config.strategy, &declaration, &result, config.verbose);
    (result, summary.to_string())
}
