//! Library crate for trace2csv
//!
//! Renders a stream of trace parse events (tables of typed columns and rows)
//! into spreadsheet-friendly delimited text, one event at a time.
//!
//! # Modules
//!
//! - [`data`]: Event vocabulary (`Event`, `Value`, `TableKind`, `ColumnType`)
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Validated run configuration
//! - [`escape`]: Separator escape expansion
//! - [`filter`]: Table include/exclude policy
//! - [`output`]: Field quoting and output sinks
//! - [`render`]: The rendering state machine
//! - [`source`]: Recorded event stream readers (JSON lines, bincode)
//!
//! # Example
//!
//! ```rust
//! use trace2csv::data::{ColumnType, Event, Value};
//! use trace2csv::render::RenderOptions;
//!
//! let events = vec![
//!     Event::table("Stats"),
//!     Event::RowBegin,
//!     Event::column(ColumnType::String, "Name"),
//!     Event::RowEnd,
//!     Event::RowBegin,
//!     Event::CellValue(Value::String("x\"y".to_string())),
//!     Event::RowEnd,
//!     Event::TableEnd,
//! ];
//!
//! let mut out = Vec::new();
//! trace2csv::convert(events.into_iter().map(Ok), &mut out, RenderOptions::default()).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "\"Stats\"\n\"Name\"\n\"x\"\"y\"\n");
//! ```

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod escape;
pub mod filter;
pub mod output;
pub mod render;
pub mod source;

pub use cli::Args;
pub use config::Config;
pub use data::{ColumnType, Event, TableKind, Value};
pub use error::{Error, Result};
pub use render::{RenderOptions, RenderSummary, Renderer};

use log::warn;
use render::TableState;
use std::io::Write;

/// Feeds every event from `events` through a [`Renderer`] writing to `out`.
///
/// The output is flushed on both the success and the error path, so tables
/// rendered before a failure stay in the output. A flush failure after an
/// error is logged and the original error is returned.
///
/// # Returns
/// * `Result<RenderSummary>` - Counters for the run, or the first error from
///   the source or the renderer
pub fn convert<I, W>(events: I, out: W, options: RenderOptions) -> Result<RenderSummary>
where
    I: IntoIterator<Item = Result<Event>>,
    W: Write,
{
    let mut renderer = Renderer::new(out, options);

    for event in events {
        let outcome = event.and_then(|e| renderer.handle(e));
        if let Err(e) = outcome {
            if let Err(flush_err) = renderer.flush() {
                warn!("Failed to flush output after error: {}", flush_err);
            }
            return Err(e);
        }
    }

    if let TableState::Open { .. } = renderer.state() {
        warn!("Event stream ended inside an open table");
    }

    let (_, summary) = renderer.finish()?;
    Ok(summary)
}
