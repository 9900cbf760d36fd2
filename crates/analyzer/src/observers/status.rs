//! Status — histogram of HTTP status codes.

use std::collections::BTreeMap;

use crate::parser::{LogEntry, ParseError};
use crate::report::Metric;

use super::LogObserver;

/// Counts entries per status code, keyed by the exact three-digit string.
#[derive(Debug, Default)]
pub struct StatusCodesObserver {
    counts: BTreeMap<String, u64>,
}

impl StatusCodesObserver {
    pub fn status_codes(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    pub fn count(&self, code: &str) -> u64 {
        self.counts.get(code).copied().unwrap_or(0)
    }
}

impl LogObserver for StatusCodesObserver {
    fn name(&self) -> &'static str {
        "StatusCodesObserver"
    }

    fn observe(&mut self, entry: &LogEntry) -> Result<(), ParseError> {
        *self.counts.entry(entry.status.clone()).or_insert(0) += 1;
        Ok(())
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![Metric::map(
            "status_codes",
            self.counts.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::entry_with_status;

    #[test]
    fn test_counts_by_exact_code() {
        let mut observer = StatusCodesObserver::default();
        observer.observe(&entry_with_status("404")).unwrap();
        observer.observe(&entry_with_status("404")).unwrap();
        observer.observe(&entry_with_status("206")).unwrap();

        assert_eq!(observer.count("404"), 2);
        assert_eq!(observer.count("206"), 1);
        assert_eq!(observer.count("500"), 0);
    }

    #[test]
    fn test_metric_rows_are_key_ordered() {
        let mut observer = StatusCodesObserver::default();
        observer.observe(&entry_with_status("404")).unwrap();
        observer.observe(&entry_with_status("206")).unwrap();
        observer.observe(&entry_with_status("404")).unwrap();

        assert_eq!(
            observer.metrics(),
            vec![Metric::map(
                "status_codes",
                vec![("206".to_string(), 1), ("404".to_string(), 2)],
            )]
        );
    }
}
