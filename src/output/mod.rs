//! Output layer for the `trace2csv` converter.
//!
//! # Submodules
//!
//! - **quote**: quoting of text fields for delimited output
//! - **sink**: standard output or file destinations, opened before a run
//!
//! The renderer writes straight into a sink field by field, so no table is
//! ever held in memory.

pub mod quote;
pub mod sink;

pub use quote::{quote_field, write_quoted};
pub use sink::{OutputSink, OutputTarget};
