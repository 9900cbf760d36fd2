//! Cli — command-line argument surface.
//!
//! The CLI is a thin boundary: it resolves raw flag strings into typed
//! [`RunOptions`] and hands everything else to the pipeline.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Parser;

use crate::pipeline::{PipelineError, RunOptions};
use crate::report::ReportFormat;

/// Time-bound format accepted on the command line, e.g. `31/Aug/2024 15:30:00`.
pub const BOUND_FORMAT: &str = "%d/%b/%Y %H:%M:%S";

#[derive(Debug, Parser)]
#[command(
    name = "analyzer",
    about = "Access-log statistics and report generation"
)]
pub struct Cli {
    /// Path or URL of the access log to analyze
    #[arg(long)]
    pub path: String,

    /// Start of the time range, inclusive (dd/Mon/yyyy HH:MM:SS)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the time range, exclusive (dd/Mon/yyyy HH:MM:SS)
    #[arg(long)]
    pub to: Option<String>,

    /// Field to filter by, e.g. "agent" or "status"
    #[arg(long)]
    pub filter_field: Option<String>,

    /// Substring the filtered field must contain (case-insensitive)
    #[arg(long)]
    pub filter_value: Option<String>,

    /// Report format: "markdown" selects Markdown, anything else AsciiDoc
    #[arg(long, default_value = "adoc")]
    pub format: String,

    /// Directory to write the report into
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Cli {
    pub fn into_options(self) -> Result<RunOptions, PipelineError> {
        let from = parse_bound(self.from.as_deref())?;
        let to = parse_bound(self.to.as_deref())?;

        Ok(RunOptions {
            source: self.path,
            from,
            to,
            filter_field: self.filter_field,
            filter_value: self.filter_value,
            format: ReportFormat::from_config(&self.format),
            output_dir: self.output_dir,
        })
    }
}

fn parse_bound(raw: Option<&str>) -> Result<Option<NaiveDateTime>, PipelineError> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some("") => Ok(None),
        Some(raw) => NaiveDateTime::parse_from_str(raw, BOUND_FORMAT)
            .map(Some)
            .map_err(|_| PipelineError::InvalidBound(raw.to_string())),
    }
}
