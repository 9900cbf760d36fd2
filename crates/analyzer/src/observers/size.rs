//! Size — response-size statistics (running average and 95th percentile).

use std::cell::{Cell, RefCell};

use crate::parser::{LogEntry, ParseError};
use crate::report::Metric;

use super::LogObserver;

const PERCENTILE: f64 = 0.95;

fn parse_size(raw: &str) -> Result<u64, ParseError> {
    raw.parse::<u64>()
        .map_err(|_| ParseError::InvalidSize(raw.to_string()))
}

/// Running average of response sizes.
///
/// An entry whose size field does not parse as a non-negative integer is
/// skipped for this observer only, leaving sum and count unchanged.
#[derive(Debug, Default)]
pub struct AverageResponseSizeObserver {
    total_size: u64,
    count: u64,
}

impl AverageResponseSizeObserver {
    /// Truncating integer average over the valid sizes seen so far; 0 before
    /// any valid entry.
    pub fn average(&self) -> u64 {
        if self.count == 0 {
            0
        } else {
            self.total_size / self.count
        }
    }
}

impl LogObserver for AverageResponseSizeObserver {
    fn name(&self) -> &'static str {
        "AverageResponseSizeObserver"
    }

    fn observe(&mut self, entry: &LogEntry) -> Result<(), ParseError> {
        let size = parse_size(&entry.size)?;
        self.count += 1;
        self.total_size += size;
        Ok(())
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![Metric::scalar("average_response_size", self.average())]
    }
}

/// 95th percentile of response sizes.
///
/// Appends are O(1): each append marks the backing list dirty and the next
/// read sorts it once. Percentile index is `ceil(0.95 * n) - 1` into the
/// ascending-sorted list, 0 when the list is empty.
#[derive(Debug, Default)]
pub struct ResponseSizePercentileObserver {
    sizes: RefCell<Vec<u64>>,
    dirty: Cell<bool>,
}

impl ResponseSizePercentileObserver {
    pub fn percentile(&self) -> u64 {
        let mut sizes = self.sizes.borrow_mut();
        if sizes.is_empty() {
            return 0;
        }

        if self.dirty.get() {
            sizes.sort_unstable();
            self.dirty.set(false);
        }

        let index = (PERCENTILE * sizes.len() as f64).ceil() as usize - 1;
        sizes[index]
    }
}

impl LogObserver for ResponseSizePercentileObserver {
    fn name(&self) -> &'static str {
        "ResponseSizePercentileObserver"
    }

    fn observe(&mut self, entry: &LogEntry) -> Result<(), ParseError> {
        let size = parse_size(&entry.size)?;
        self.sizes.borrow_mut().push(size);
        self.dirty.set(true);
        Ok(())
    }

    fn metrics(&self) -> Vec<Metric> {
        vec![Metric::scalar("percentile", self.percentile())]
    }
}
