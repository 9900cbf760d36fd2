//! Model — parsed log entries and parse failure classification.

use thiserror::Error;

/// One fully parsed access-log record.
///
/// All fields are kept as raw text exactly as captured from the line; semantic
/// interpretation (timestamps, sizes) happens downstream. An entry only exists
/// if the whole line matched the grammar — there is no partial entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Client address (IPv4 or IPv6 literal).
    pub address: String,
    /// Raw timestamp, e.g. `17/May/2015:14:05:39 +0000`.
    pub timestamp: String,
    /// Full request line, e.g. `GET /downloads/product_2 HTTP/1.1`.
    pub request: String,
    /// Three-digit HTTP status code.
    pub status: String,
    /// Response size in bytes, as text.
    pub size: String,
    pub referrer: String,
    pub agent: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("log line is empty")]
    Empty,

    #[error("invalid log format: {0}")]
    InvalidFormat(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid response size: {0}")]
    InvalidSize(String),
}
