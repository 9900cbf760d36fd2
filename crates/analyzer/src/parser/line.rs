//! Line — single-line parsing with synchronous observer fan-out.

use crate::observers::ObserverSet;

use super::grammar;
use super::model::{LogEntry, ParseError};

/// Parses individual log lines and feeds every successful entry to the
/// registered observers, in registration order, before returning.
///
/// The observer set is an explicit value owned by the parser for the duration
/// of one ingestion run; there is no global registry.
pub struct LogParser {
    observers: ObserverSet,
}

impl LogParser {
    pub fn new(observers: ObserverSet) -> Self {
        Self { observers }
    }

    /// Parse one line against the access-log grammar.
    ///
    /// Fails with [`ParseError::Empty`] for a blank line and
    /// [`ParseError::InvalidFormat`] for a line that does not match the
    /// grammar; either failure short-circuits before any observer sees the
    /// entry. An observer error during notification is logged by the set and
    /// does not affect the remaining observers or the returned entry.
    pub fn parse(&mut self, line: &str) -> Result<LogEntry, ParseError> {
        if line.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let entry = grammar::entry(line)
            .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;

        self.observers.notify(&entry);
        Ok(entry)
    }

    pub fn observers(&self) -> &ObserverSet {
        &self.observers
    }

    pub fn into_observers(self) -> ObserverSet {
        self.observers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observers::{LogObserver, TotalRequestsObserver};
    use crate::report::Metric;
    use crate::testdata::SAMPLE_EARLY_LOG;

    /// Observer that always fails, for exercising notification recovery.
    struct FailingObserver;

    impl LogObserver for FailingObserver {
        fn name(&self) -> &'static str {
            "FailingObserver"
        }

        fn observe(&mut self, entry: &LogEntry) -> Result<(), ParseError> {
            Err(ParseError::InvalidSize(entry.size.clone()))
        }

        fn metrics(&self) -> Vec<Metric> {
            Vec::new()
        }
    }

    fn parser_with_total() -> LogParser {
        let mut set = ObserverSet::new();
        set.register(Box::new(TotalRequestsObserver::default()));
        LogParser::new(set)
    }

    #[test]
    fn test_parse_round_trips_sample_line() {
        let mut parser = parser_with_total();
        let entry = parser.parse(SAMPLE_EARLY_LOG).expect("sample line parses");

        assert_eq!(entry.address, "91.239.186.133");
        assert_eq!(entry.timestamp, "17/May/2015:14:05:39 +0000");
        assert_eq!(entry.status, "304");
        assert_eq!(entry.size, "1234");
    }

    #[test]
    fn test_parse_empty_line_fails_without_notification() {
        let mut parser = parser_with_total();
        assert!(matches!(parser.parse(""), Err(ParseError::Empty)));
        assert!(matches!(parser.parse("   "), Err(ParseError::Empty)));

        let metrics = parser.observers().metrics();
        assert_eq!(metrics[0].1, Metric::scalar("total_requests", 0));
    }

    #[test]
    fn test_parse_garbage_line_fails() {
        let mut parser = parser_with_total();
        assert!(matches!(
            parser.parse("not a log line"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_observers_are_notified_per_parsed_line() {
        let mut parser = parser_with_total();
        parser.parse(SAMPLE_EARLY_LOG).expect("parses");
        parser.parse(SAMPLE_EARLY_LOG).expect("parses");

        let metrics = parser.observers().metrics();
        assert_eq!(metrics[0].1, Metric::scalar("total_requests", 2));
    }

    #[test]
    fn test_failing_observer_does_not_stop_the_rest() {
        let mut set = ObserverSet::new();
        set.register(Box::new(FailingObserver));
        set.register(Box::new(TotalRequestsObserver::default()));
        let mut parser = LogParser::new(set);

        parser.parse(SAMPLE_EARLY_LOG).expect("parse still succeeds");

        let metrics = parser.observers().metrics();
        assert_eq!(metrics[0].1, Metric::scalar("total_requests", 1));
    }
}
