//! Aggregation of per-attempt output into one text.
//!
//! Captures from successive attempts are joined with an ASCII record separator
//! (0x1E). Ordinary command output never contains that byte, so splitting on it
//! recovers the attempt boundaries. A command that does print 0x1E will have its
//! output split in the wrong places; nothing escapes it.
//!
//! Empty captures are dropped before joining. The last record is therefore the
//! last *non-empty* capture, which belongs to an earlier attempt when the final
//! attempt printed nothing.

/// Separator placed between the records of successive attempts
pub const RECORD_SEPARATOR: char = '\x1e';

/// Join non-empty captures with the record separator
pub fn join_records<S: AsRef<str>>(captures: &[S]) -> String {
    let mut joined = String::new();
    for capture in captures
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|c| !c.is_empty())
    {
        if !joined.is_empty() {
            joined.push(RECORD_SEPARATOR);
        }
        joined.push_str(capture);
    }
    joined
}

/// Split aggregated text back into records.
///
/// Text without a separator is a single record; the empty string yields one
/// empty record.
pub fn split_records(aggregated: &str) -> Vec<&str> {
    aggregated.split(RECORD_SEPARATOR).collect()
}

/// The last record of aggregated text
pub fn last_record(aggregated: &str) -> &str {
    aggregated
        .rsplit(RECORD_SEPARATOR)
        .next()
        .unwrap_or(aggregated)
}
