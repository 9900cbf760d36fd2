//! Grammar — the fixed access-log pattern and capture-group helpers.
//!
//! Format of a log line:
//! `ADDRESS - - [TIMESTAMP] "REQUEST" STATUS SIZE "REFERRER" "USER_AGENT"`
//!
//! The address accepts both IPv4 and IPv6 literals; matching is anchored to
//! the whole line, never partial.

use std::sync::OnceLock;

use regex::Regex;

use super::model::LogEntry;

pub const LOG_PATTERN: &str =
    r#"^([\dA-Fa-f:.]+)\s+-\s+-\s+\[(.*?)]\s+"(.*?)"\s+(\d{3})\s+(\d+)\s+"(.*?)"\s+"(.*?)"$"#;

/// Capture-group indices within [`LOG_PATTERN`].
pub(crate) mod groups {
    pub const ADDRESS: usize = 1;
    pub const TIMESTAMP: usize = 2;
    pub const REQUEST: usize = 3;
    pub const STATUS: usize = 4;
    pub const SIZE: usize = 5;
    pub const REFERRER: usize = 6;
    pub const USER_AGENT: usize = 7;
}

/// The compiled grammar, built once per process.
pub fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(LOG_PATTERN).expect("log grammar pattern is valid"))
}

/// Parse a full line into an entry. `None` when the line does not match the
/// grammar exactly.
pub fn entry(line: &str) -> Option<LogEntry> {
    let caps = pattern().captures(line)?;
    Some(LogEntry {
        address: caps[groups::ADDRESS].to_string(),
        timestamp: caps[groups::TIMESTAMP].to_string(),
        request: caps[groups::REQUEST].to_string(),
        status: caps[groups::STATUS].to_string(),
        size: caps[groups::SIZE].to_string(),
        referrer: caps[groups::REFERRER].to_string(),
        agent: caps[groups::USER_AGENT].to_string(),
    })
}

/// Extract only the raw timestamp capture from a line.
pub fn timestamp(line: &str) -> Option<&str> {
    capture(line, groups::TIMESTAMP)
}

/// Extract a single capture group from a line.
pub(crate) fn capture(line: &str, group: usize) -> Option<&str> {
    pattern()
        .captures(line)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str())
}
