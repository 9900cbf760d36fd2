//! Render — metric collection and width-fitted table layout.
//!
//! Both dialects share the same layout algorithm and differ only in heading
//! tokens and the Markdown divider row.

use std::fmt::Write as _;

use crate::observers::ObserverSet;

use super::metric::MetricValue;

const METRIC_HEADER: &str = "Metric";
const VALUE_HEADER: &str = "Value";
const KEY_HEADER: &str = "Key";

/// Report output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// AsciiDoc-flavoured markup (the default).
    Adoc,
    /// Lighter Markdown markup.
    Markdown,
}

impl ReportFormat {
    /// Dialect selection from the external configuration string:
    /// `"markdown"` selects Markdown, anything else AsciiDoc.
    pub fn from_config(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("markdown") {
            Self::Markdown
        } else {
            Self::Adoc
        }
    }

    /// Output file extension for this dialect.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Adoc => "adoc",
            Self::Markdown => "md",
        }
    }

    fn report_heading(&self) -> &'static str {
        match self {
            Self::Adoc => "## Log Report",
            Self::Markdown => "# Log Report",
        }
    }

    fn section_prefix(&self) -> &'static str {
        match self {
            Self::Adoc => "####",
            Self::Markdown => "##",
        }
    }

    fn divider(&self) -> bool {
        matches!(self, Self::Markdown)
    }
}

/// Render the observers' current metrics as a tabular report.
///
/// Scalar metrics form one two-column `Metric`/`Value` table; each map metric
/// gets its own `(Map)`-suffixed section with a `Key`/`Value` table. Rendering
/// reads observer state without modifying it, so re-rendering an unmodified
/// set is byte-identical.
pub fn render(source_name: &str, observers: &ObserverSet, format: ReportFormat) -> String {
    let mut scalars: Vec<(String, String)> = Vec::new();
    let mut maps: Vec<(String, Vec<(String, String)>)> = Vec::new();

    for (name, metric) in observers.metrics() {
        let label = metric_label(name, metric.accessor);
        match metric.value {
            MetricValue::Scalar(value) => scalars.push((label, value.to_string())),
            MetricValue::Map(rows) => maps.push((
                label,
                rows.into_iter().map(|(k, v)| (k, v.to_string())).collect(),
            )),
        }
    }

    let mut out = String::new();

    out.push_str(format.report_heading());
    out.push_str("\n\n");
    let _ = writeln!(out, "{} General Information", format.section_prefix());
    let _ = writeln!(out, "Log File(s): `{source_name}`");
    out.push('\n');

    write_table(&mut out, METRIC_HEADER, VALUE_HEADER, &scalars, format);

    for (label, rows) in &maps {
        out.push('\n');
        let _ = writeln!(out, "{} {label} (Map)", format.section_prefix());
        out.push('\n');
        write_table(&mut out, KEY_HEADER, VALUE_HEADER, rows, format);
    }

    out
}

/// Emit one two-column table with both columns padded to the widest cell.
fn write_table(
    out: &mut String,
    left_header: &str,
    right_header: &str,
    rows: &[(String, String)],
    format: ReportFormat,
) {
    let left_width = rows
        .iter()
        .map(|(l, _)| l.len())
        .chain([left_header.len()])
        .max()
        .unwrap_or(0);
    let right_width = rows
        .iter()
        .map(|(_, r)| r.len())
        .chain([right_header.len()])
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "| {left_header:<left_width$} | {right_header:<right_width$} |"
    );
    if format.divider() {
        let _ = writeln!(
            out,
            "|{:-<lw$}|{:-<rw$}|",
            "",
            "",
            lw = left_width + 2,
            rw = right_width + 2
        );
    }
    for (left, right) in rows {
        let _ = writeln!(out, "| {left:<left_width$} | {right:<right_width$} |");
    }
}

/// Build a report label from an observer type name and an accessor name:
/// the `Observer` suffix is stripped, the accessor humanized.
fn metric_label(observer_name: &str, accessor: &str) -> String {
    let display = observer_name
        .strip_suffix("Observer")
        .unwrap_or(observer_name);
    format!("{display} {}", humanize(accessor))
}

/// Turn an accessor identifier into space-separated capitalized words:
/// `"total_requests"` and `"totalRequests"` both become `"Total Requests"`.
fn humanize(accessor: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in accessor.chars() {
        if ch == '_' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_ascii_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
