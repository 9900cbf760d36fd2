//! Source — resolving a log source (local file or URL) into raw lines.

use std::fs;
use std::io;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::info;

use crate::filter;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("log source not found: {0}")]
    NotFound(String),

    #[error("log source unreachable: {path}: {reason}")]
    Unreachable { path: String, reason: String },
}

/// Load raw log lines from a file path or HTTP(S) URL, applying the optional
/// time-range pre-filter.
///
/// With no bounds the lines come back untouched, so malformed lines reach the
/// parser and are counted there; with at least one bound the range filter
/// drops them early (with warnings), exactly like any out-of-range line.
pub fn load_lines(
    path_or_url: &str,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<Vec<String>, SourceError> {
    let text = if is_url(path_or_url) {
        fetch_url(path_or_url)?
    } else {
        read_file(path_or_url)?
    };

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    info!(source = path_or_url, lines = lines.len(), "loaded log source");

    if start.is_none() && end.is_none() {
        return Ok(lines);
    }
    Ok(filter::filter_by_range(lines, start, end))
}

fn is_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

fn read_file(path: &str) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SourceError::NotFound(path.to_string()),
        _ => SourceError::Unreachable {
            path: path.to_string(),
            reason: e.to_string(),
        },
    })
}

fn fetch_url(url: &str) -> Result<String, SourceError> {
    let unreachable = |reason: String| SourceError::Unreachable {
        path: url.to_string(),
        reason,
    };

    let response = reqwest::blocking::get(url).map_err(|e| unreachable(e.to_string()))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(SourceError::NotFound(url.to_string()));
    }

    let response = response
        .error_for_status()
        .map_err(|e| unreachable(e.to_string()))?;

    response.text().map_err(|e| unreachable(e.to_string()))
}
