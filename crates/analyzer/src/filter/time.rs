//! Time — timestamp-range filtering of raw lines and parsed entries.
//!
//! Bounds are applied independently: a missing start means "from the
//! beginning", a missing end means "to the end". The start bound is
//! inclusive, the end bound exclusive.

use chrono::{DateTime, NaiveDateTime};
use tracing::warn;

use crate::parser::{grammar, LogEntry, ParseError};

/// Timestamp format used inside log lines, e.g. `17/May/2015:14:05:39 +0000`.
pub const LOG_TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

/// Parse a log timestamp. Range comparisons use the local wall-clock value,
/// ignoring the offset.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ParseError> {
    DateTime::parse_from_str(raw, LOG_TIMESTAMP_FORMAT)
        .map(|ts| ts.naive_local())
        .map_err(|_| ParseError::InvalidTimestamp(raw.to_string()))
}

/// Keep the raw lines whose timestamp falls within `[start, end)`.
///
/// Lines that fail the grammar or carry an unparsable timestamp are dropped
/// with a warning; the batch never aborts.
pub fn filter_by_range(
    lines: Vec<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| match grammar::timestamp(line) {
            Some(raw) => match parse_timestamp(raw) {
                Ok(ts) => within_range(ts, start, end),
                Err(e) => {
                    warn!(line = %line, error = %e, "dropping line with unparsable timestamp");
                    false
                }
            },
            None => {
                warn!(line = %line, "line does not match the log grammar; dropping");
                false
            }
        })
        .collect()
}

fn within_range(ts: NaiveDateTime, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> bool {
    let after_start = start.map_or(true, |s| ts >= s);
    let before_end = end.map_or(true, |e| ts < e);
    after_start && before_end
}

/// Keep parsed entries with timestamps in `[start, end)`, sorted ascending by
/// parsed timestamp.
///
/// Entries with unparsable timestamps are dropped with a warning. The sort is
/// stable: entries with equal timestamps keep their original relative order.
pub fn filter_and_sort_by_range(
    entries: Vec<LogEntry>,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<LogEntry> {
    let mut keyed: Vec<(NaiveDateTime, LogEntry)> = entries
        .into_iter()
        .filter_map(|entry| match parse_timestamp(&entry.timestamp) {
            Ok(ts) => Some((ts, entry)),
            Err(e) => {
                warn!(error = %e, "dropping entry with unparsable timestamp");
                None
            }
        })
        .filter(|(ts, _)| *ts >= start && *ts < end)
        .collect();

    keyed.sort_by_key(|(ts, _)| *ts);
    keyed.into_iter().map(|(_, entry)| entry).collect()
}
