//! Assembles the executor and testers for an execution strategy

use super::asserter::ExecutorAsserter;
use super::executor::{OnceExecutor, UntilExecutor};
use super::output_tester::{last_record_testers, output_testers};
use super::result_tester::{result_tester, LastAttempt};
use crate::config::{AssertionConfig, ExecutionStrategy};

/// Build the executor-asserter for a validated configuration.
///
/// With the `until` strategy the testers are wrapped so they judge only the
/// final attempt, both inside the polling loop and in the final verdict.
pub fn build_executor_asserter(config: &AssertionConfig) -> ExecutorAsserter {
    let once = OnceExecutor::with_shell(&config.command, &config.shell);
    let policy = &config.policy;

    match config.strategy {
        ExecutionStrategy::Once => ExecutorAsserter::new(
            Box::new(once),
            result_tester(policy.result),
            output_testers(&policy.outputs),
        ),
        ExecutionStrategy::Until => {
            let until = UntilExecutor::new(
                once,
                result_tester(policy.result),
                output_testers(&policy.outputs),
                config.timeout,
                config.interval,
            );
            ExecutorAsserter::new(
                Box::new(until),
                Box::new(LastAttempt::new(result_tester(policy.result))),
                last_record_testers(output_testers(&policy.outputs)),
            )
        }
    }
}
