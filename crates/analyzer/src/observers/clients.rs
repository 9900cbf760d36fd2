//! Clients — per-address request counts, most frequent first.

use indexmap::IndexMap;

use crate::parser::{LogEntry, ParseError};
use crate::report::Metric;

use super::LogObserver;

/// Counts entries per client address.
///
/// The exposed view is re-sorted by descending count after every update, so
/// the most frequent client is always first when read. The sort is stable:
/// addresses with equal counts keep their relative first-seen order.
#[derive(Debug, Default)]
pub struct UniqueClientsObserver {
    clients: IndexMap<String, u64>,
}

impl UniqueClientsObserver {
    pub fn clients(&self) -> &IndexMap<String, u64> {
        &self.clients
    }
}

impl LogObserver for UniqueClientsObserver {
    fn name(&self) -> &'static str {
        "UniqueClientsObserver"
    }

    fn observe(&mut self, entry: &LogEntry) -> Result<(), ParseError> {
        *self.clients.entry(entry.address.clone()).or_insert(0) += 1;
        self.clients.sort_by(|_, a, _, b| b.cmp(a));
        Ok(())
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![Metric::map(
            "clients",
            self.clients.iter().map(|(k, v)| (k.clone(), *v)).collect(),
        )]
    }
}
