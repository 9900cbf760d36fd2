// Domain-driven module structure for the access-log analyzer.

// Core pipeline
pub mod filter;
pub mod observers;
pub mod parser;
pub mod report;

// Boundary modules
pub mod boot;
pub mod cli;
pub mod pipeline;
pub mod source;

#[cfg(test)]
pub(crate) mod testdata;
