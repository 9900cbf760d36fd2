//! Pipeline — the run driver: load, filter, parse, aggregate, render, write.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{info, warn};

use crate::filter::{self, FilterError};
use crate::observers::ObserverSet;
use crate::parser::LogParser;
use crate::report::{self, ReportFormat};
use crate::source::{self, SourceError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("invalid time bound: {0:?} (expected dd/Mon/yyyy HH:MM:SS)")]
    InvalidBound(String),

    #[error("failed to write report to {path}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Options for one analysis run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// File path or HTTP(S) URL of the log source.
    pub source: String,
    /// Inclusive lower time bound.
    pub from: Option<NaiveDateTime>,
    /// Exclusive upper time bound.
    pub to: Option<NaiveDateTime>,
    pub filter_field: Option<String>,
    pub filter_value: Option<String>,
    pub format: ReportFormat,
    /// Directory the report file is written into.
    pub output_dir: PathBuf,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that matched the grammar and were fed to the observers.
    pub parsed: usize,
    /// Lines dropped during ingestion (empty or grammar mismatch).
    pub skipped: usize,
    pub report_path: PathBuf,
}

/// Run the full pipeline: load the source, apply the field filter, feed every
/// surviving line through the parser into the standard observer set, render
/// the report and write it to disk.
pub fn run(options: RunOptions) -> Result<RunSummary, PipelineError> {
    let lines = source::load_lines(&options.source, options.from, options.to)?;

    let lines = filter::filter_and_sort(
        lines,
        options.filter_field.as_deref(),
        options.filter_value.as_deref(),
    )?;

    let mut parser = LogParser::new(ObserverSet::standard());
    let mut parsed = 0usize;
    let mut skipped = 0usize;

    for line in &lines {
        match parser.parse(line) {
            Ok(_) => parsed += 1,
            Err(e) => {
                warn!(error = %e, "skipping malformed line");
                skipped += 1;
            }
        }
    }

    let source_name = basename(&options.source);
    let text = report::render(source_name, parser.observers(), options.format);

    let report_path = options.output_dir.join(format!(
        "{source_name}_log_report.{}",
        options.format.extension()
    ));
    fs::write(&report_path, &text).map_err(|e| PipelineError::ReportWrite {
        path: report_path.display().to_string(),
        source: e,
    })?;

    info!(parsed, skipped, report = %report_path.display(), "run complete");

    Ok(RunSummary {
        parsed,
        skipped,
        report_path,
    })
}

/// Last path segment of the source identifier, used for report naming.
fn basename(source: &str) -> &str {
    source.rsplit('/').next().unwrap_or(source)
}
