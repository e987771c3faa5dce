//! Bincode event streams.
//!
//! A stream is a plain concatenation of bincode-encoded [`Event`] values
//! with no header or length prefix. The end of input between two events
//! ends the stream; the end of input inside an event is an error.
//!
//! Encoding uses fixed-width little-endian integers, the same layout as
//! `bincode::serialize`. Decoding caps each event at [`MAX_EVENT_BYTES`] so a
//! corrupt length prefix fails as a malformed event instead of allocating.

use crate::data::Event;
use crate::error::{Error, Result};
use bincode::Options;
use std::io::{BufRead, Write};

/// Upper bound on the encoded size of a single event.
pub const MAX_EVENT_BYTES: u64 = 16 * 1024 * 1024;

fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(MAX_EVENT_BYTES)
}

/// Reads consecutive bincode events from a buffered reader.
pub struct BincodeSource<R: BufRead> {
    reader: R,
    index: usize,
    failed: bool,
}

impl<R: BufRead> BincodeSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            index: 0,
            failed: false,
        }
    }

    fn at_end(&mut self) -> Result<bool> {
        Ok(self.reader.fill_buf()?.is_empty())
    }
}

impl<R: BufRead> Iterator for BincodeSource<R> {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.at_end() {
            Ok(true) => return None,
            Ok(false) => {}
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        }

        let decoded: Result<Event> = codec().deserialize_from(&mut self.reader).map_err(|e| {
            Error::MalformedEvent {
                position: format!("event {}", self.index),
                message: e.to_string(),
            }
        });
        self.index += 1;
        self.failed = decoded.is_err();
        Some(decoded)
    }
}

/// Writes `events` as a bincode stream.
pub fn write_bincode_events<'a, W, I>(mut out: W, events: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Event>,
{
    for event in events {
        codec().serialize_into(&mut out, event).map_err(|e| Error::MalformedEvent {
            position: "output".to_string(),
            message: e.to_string(),
        })?;
    }
    out.flush()?;
    Ok(())
}
