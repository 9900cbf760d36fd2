//! Total — running count of parsed entries.

use crate::parser::{LogEntry, ParseError};
use crate::report::Metric;

use super::LogObserver;

#[derive(Debug, Default)]
pub struct TotalRequestsObserver {
    total: u64,
}

impl TotalRequestsObserver {
    pub fn total_requests(&self) -> u64 {
        self.total
    }
}

impl LogObserver for TotalRequestsObserver {
    fn name(&self) -> &'static str {
        "TotalRequestsObserver"
    }

    fn observe(&mut self, _entry: &LogEntry) -> Result<(), ParseError> {
        self.total += 1;
        Ok(())
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![Metric::scalar("total_requests", self.total)]
    }
}
