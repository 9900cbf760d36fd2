//! Requests — request-line and referrer histograms.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::parser::{LogEntry, ParseError};
use crate::report::Metric;

use super::LogObserver;

/// Counts identical request lines, preserving first-seen order for display.
#[derive(Debug, Default)]
pub struct RequestsObserver {
    requests: IndexMap<String, u64>,
}

impl RequestsObserver {
    pub fn requests(&self) -> &IndexMap<String, u64> {
        &self.requests
    }
}

impl LogObserver for RequestsObserver {
    fn name(&self) -> &'static str {
        "RequestsObserver"
    }

    fn observe(&mut self, entry: &LogEntry) -> Result<(), ParseError> {
        *self.requests.entry(entry.request.clone()).or_insert(0) += 1;
        Ok(())
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![Metric::map(
            "requests",
            self.requests.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        )]
    }
}

/// Counts entries per referrer.
#[derive(Debug, Default)]
pub struct ReferrersObserver {
    referrers: BTreeMap<String, u64>,
}

impl ReferrersObserver {
    pub fn referrers(&self) -> &BTreeMap<String, u64> {
        &self.referrers
    }
}

impl LogObserver for ReferrersObserver {
    fn name(&self) -> &'static str {
        "ReferrersObserver"
    }

    fn observe(&mut self, entry: &LogEntry) -> Result<(), ParseError> {
        *self.referrers.entry(entry.referrer.clone()).or_insert(0) += 1;
        Ok(())
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![Metric::map(
            "referrers",
            self.referrers.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        )]
    }
}
