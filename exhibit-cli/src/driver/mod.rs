//! Example Driver
//!
//! Runs a target's examples and reports progress.
//!
//! ## Modules
//!
//! - [`execution`] - The per-member run loop and its tally
//! - [`formatting`] - Header/diagnostic text and the `Reporter` sinks

mod execution;
mod formatting;

pub use execution::{Driver, RunSummary};
pub use formatting::{ConsoleReporter, Reporter, WriterReporter, format_failure, format_header};
