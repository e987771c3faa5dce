//! Event sources for the converter.
//!
//! The renderer accepts any `Iterator<Item = Result<Event>>`. This module
//! provides readers for recorded event streams, which carry the events a
//! trace decoder produced:
//!
//! - [`JsonLinesSource`]: one JSON-encoded event per line
//! - [`BincodeSource`]: consecutive bincode-encoded events
//!
//! [`open_source`] opens a file and picks the reader from an
//! [`InputFormat`].

pub mod binary;
pub mod json;

pub use binary::{BincodeSource, write_bincode_events};
pub use json::{JsonLinesSource, write_json_events};

use crate::data::Event;
use crate::error::{Error, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Encoding of a recorded event stream.
///
/// # Variants
/// * `Auto` - Pick from the file extension (`.json`, `.jsonl`, `.ndjson` are
///   JSON lines; anything else is bincode)
/// * `Json` - JSON lines
/// * `Bincode` - Consecutive bincode records
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    #[default]
    Auto,
    Json,
    Bincode,
}

impl InputFormat {
    /// Resolves `Auto` against the extension of `path`.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_ascii_lowercase());
                match ext.as_deref() {
                    Some("json" | "jsonl" | "ndjson") => InputFormat::Json,
                    _ => InputFormat::Bincode,
                }
            }
            other => other,
        }
    }
}

/// A boxed event source over any recorded format.
pub type EventSource = Box<dyn Iterator<Item = Result<Event>>>;

/// Opens `path` and returns an event source for `format`.
///
/// # Returns
/// * `Result<EventSource>` - The source, or [`Error::InputOpen`] if the file
///   cannot be opened
pub fn open_source(path: &Path, format: InputFormat) -> Result<EventSource> {
    let file = File::open(path).map_err(|source| Error::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    Ok(match format.resolve(path) {
        InputFormat::Json => Box::new(JsonLinesSource::new(reader)),
        InputFormat::Bincode | InputFormat::Auto => Box::new(BincodeSource::new(reader)),
    })
}
