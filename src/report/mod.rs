//! Human-readable rendering of a test: what will run, and how it went

mod declare;
mod summary;

pub use declare::{declaration, describe_assertions, quote};
pub use summary::{compress_records, summarize, Summary};
