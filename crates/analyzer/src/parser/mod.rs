//! Access-log line parsing.
//!
//! Converts raw access-log lines into structured [`LogEntry`] values via a
//! single fixed grammar, and fans each successful entry out to the registered
//! observers.
//!
//! - `grammar.rs`: the fixed log-line pattern and capture-group helpers
//! - `model.rs`: the parsed entry value and parse failure classification
//! - `line.rs`: `LogParser` — single-line parsing with observer fan-out

pub mod grammar;
pub mod line;
pub mod model;

// Re-export commonly used types
pub use line::LogParser;
pub use model::{LogEntry, ParseError};
