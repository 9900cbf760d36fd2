//! Metric — named snapshot values read out of observers for reporting.

/// The value side of a metric: a scalar, or a keyed label-to-count table in
/// the order the owning observer exposes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricValue {
    Scalar(u64),
    Map(Vec<(String, u64)>),
}

/// A named, read-only snapshot value exposed by an observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    /// Accessor name in snake_case, matching the observer's getter; the
    /// renderer humanizes it for display.
    pub accessor: &'static str,
    pub value: MetricValue,
}

impl Metric {
    pub fn scalar(accessor: &'static str, value: u64) -> Self {
        Self {
            accessor,
            value: MetricValue::Scalar(value),
        }
    }

    pub fn map(accessor: &'static str, rows: Vec<(String, u64)>) -> Self {
        Self {
            accessor,
            value: MetricValue::Map(rows),
        }
    }
}
