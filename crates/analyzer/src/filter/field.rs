//! Field — substring filtering over a named capture of the grammar.

use thiserror::Error;
use tracing::warn;

use crate::parser::grammar::{self, groups};

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("unknown filter field: {0:?}")]
    UnknownField(String),
}

/// A named, filterable field of the log grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogField {
    Address,
    Request,
    Status,
    Size,
    Referrer,
    Agent,
}

impl LogField {
    /// Resolve a user-supplied field name. Matching is case-insensitive and
    /// each field answers to a handful of aliases.
    pub fn resolve(name: &str) -> Result<Self, FilterError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ip" | "address" | "ip address" => Ok(Self::Address),
            "request" => Ok(Self::Request),
            "code" | "status" | "status code" => Ok(Self::Status),
            "response_size" | "size" | "response size" => Ok(Self::Size),
            "referrer" => Ok(Self::Referrer),
            "agent" | "user agent" | "user_agent" => Ok(Self::Agent),
            _ => Err(FilterError::UnknownField(name.to_string())),
        }
    }

    fn capture_group(&self) -> usize {
        match self {
            Self::Address => groups::ADDRESS,
            Self::Request => groups::REQUEST,
            Self::Status => groups::STATUS,
            Self::Size => groups::SIZE,
            Self::Referrer => groups::REFERRER,
            Self::Agent => groups::USER_AGENT,
        }
    }
}

/// Filter raw lines by a case-insensitive substring match on one grammar
/// field, then sort the survivors in ascending lexicographic order over the
/// full line text.
///
/// A blank `field` or `value` turns the filter off: the input comes back in
/// its original order. An unrecognized field name is caller misuse and fails
/// hard; a line that fails the grammar is only skipped, with a warning.
pub fn filter_and_sort(
    lines: Vec<String>,
    field: Option<&str>,
    value: Option<&str>,
) -> Result<Vec<String>, FilterError> {
    let (field, value) = match (nonblank(field), nonblank(value)) {
        (Some(field), Some(value)) => (field, value),
        _ => return Ok(lines),
    };

    let field = LogField::resolve(field)?;
    let needle = value.to_lowercase();

    let mut kept: Vec<String> = lines
        .into_iter()
        .filter(|line| match grammar::capture(line, field.capture_group()) {
            Some(text) => text.to_lowercase().contains(&needle),
            None => {
                warn!(line = %line, "line does not match the log grammar; skipping");
                false
            }
        })
        .collect();

    kept.sort();
    Ok(kept)
}

fn nonblank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
