//! Executing a command and asserting on its outcome and output

pub mod asserter;
pub mod builder;
pub mod executor;
pub mod outcome;
pub mod output_tester;
pub mod policy;
pub mod records;
pub mod result_tester;

pub use asserter::{AssertionResult, ExecutorAsserter};
pub use builder::build_executor_asserter;
pub use executor::{Execution, Executor, OnceExecutor, UntilExecutor};
pub use outcome::{CompoundOutcome, Outcome, RunOutcome, Termination};
pub use policy::{AssertionPolicy, OutputAssertion, OutputPolicy, ResultPolicy};
