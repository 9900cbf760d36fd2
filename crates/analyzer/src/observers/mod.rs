//! Observers — streaming statistic collectors fed one entry at a time.
//!
//! Each observer owns its private counters, scoped to one ingestion run, and
//! exposes a snapshot of named metrics for reporting. The set is an explicit
//! value constructed per run and owned by the pipeline; there is no global
//! registry and no shared state between observers.

mod clients;
mod requests;
mod size;
mod status;
mod total;

pub use clients::UniqueClientsObserver;
pub use requests::{ReferrersObserver, RequestsObserver};
pub use size::{AverageResponseSizeObserver, ResponseSizePercentileObserver};
pub use status::StatusCodesObserver;
pub use total::TotalRequestsObserver;

use tracing::{error, info};

use crate::parser::{LogEntry, ParseError};
use crate::report::Metric;

/// A streaming statistic collector.
pub trait LogObserver {
    /// Type name used when labelling metrics in the report
    /// (the renderer strips the `Observer` suffix).
    fn name(&self) -> &'static str;

    /// Consume one parsed entry, updating internal counters.
    ///
    /// An error here means this observer skipped the entry; it must leave the
    /// observer's counters consistent with the entries it has accepted so far.
    fn observe(&mut self, entry: &LogEntry) -> Result<(), ParseError>;

    /// Snapshot of the metrics this observer currently exposes.
    fn metrics(&self) -> Vec<Metric>;
}

/// An ordered collection of observers; registration order is report order.
#[derive(Default)]
pub struct ObserverSet {
    observers: Vec<Box<dyn LogObserver>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard seven-observer set, registered in report order.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.register(Box::new(TotalRequestsObserver::default()));
        set.register(Box::new(StatusCodesObserver::default()));
        set.register(Box::new(ReferrersObserver::default()));
        set.register(Box::new(AverageResponseSizeObserver::default()));
        set.register(Box::new(ResponseSizePercentileObserver::default()));
        set.register(Box::new(RequestsObserver::default()));
        set.register(Box::new(UniqueClientsObserver::default()));
        set
    }

    pub fn register(&mut self, observer: Box<dyn LogObserver>) {
        info!(observer = observer.name(), "registered observer");
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver one entry to every observer, in registration order.
    ///
    /// An observer error is logged and must not prevent the remaining
    /// observers from seeing the same entry.
    pub fn notify(&mut self, entry: &LogEntry) {
        for observer in &mut self.observers {
            if let Err(e) = observer.observe(entry) {
                error!(observer = observer.name(), error = %e, "observer skipped entry");
            }
        }
    }

    /// Metric snapshots from every observer, in registration order, paired
    /// with the owning observer's name.
    pub fn metrics(&self) -> Vec<(&'static str, Metric)> {
        self.observers
            .iter()
            .flat_map(|observer| {
                let name = observer.name();
                observer.metrics().into_iter().map(move |m| (name, m))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testdata::{entry_with_size, entry_with_status};

    #[test]
    fn test_standard_set_registers_seven_observers() {
        let set = ObserverSet::standard();
        assert_eq!(set.len(), 7);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_notify_feeds_every_observer() {
        let mut set = ObserverSet::standard();
        set.notify(&entry_with_status("200"));
        set.notify(&entry_with_size("512"));

        let metrics = set.metrics();
        // First registered observer is the total count.
        assert_eq!(metrics[0].1, Metric::scalar("total_requests", 2));
    }

    #[test]
    fn test_metrics_follow_registration_order() {
        let set = ObserverSet::standard();
        let names: Vec<&str> = set.metrics().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "TotalRequestsObserver",
                "StatusCodesObserver",
                "ReferrersObserver",
                "AverageResponseSizeObserver",
                "ResponseSizePercentileObserver",
                "RequestsObserver",
                "UniqueClientsObserver",
            ]
        );
    }
}
