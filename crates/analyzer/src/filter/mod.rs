//! Filtering stages applied around parsing.
//!
//! - `field.rs`: substring filtering on a named grammar field, plus the
//!   lexicographic re-sort
//! - `time.rs`: timestamp-range filtering of raw lines and parsed entries

pub mod field;
pub mod time;

pub use field::{filter_and_sort, FilterError, LogField};
pub use time::{filter_and_sort_by_range, filter_by_range};
