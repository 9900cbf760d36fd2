//! Report — metric snapshots and tabular rendering in two dialects.
//!
//! Observers expose their state as [`Metric`] values through an explicit
//! capability method; the renderer discovers nothing at runtime beyond what
//! the observers hand it, so adding an observer never touches this module.

mod metric;
mod render;

pub use metric::{Metric, MetricValue};
pub use render::{render, ReportFormat};
