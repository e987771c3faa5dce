//! JSON lines event streams.
//!
//! Each non-blank line holds one [`Event`] in serde's externally tagged
//! form, for example:
//!
//! ```text
//! {"table_begin":{"kind":"basic","name":"Stats"}}
//! "row_begin"
//! {"column_declare":{"column_type":"string","name":"Name"}}
//! "row_end"
//! ```

use crate::data::Event;
use crate::error::{Error, Result};
use std::io::{BufRead, Lines, Write};

/// Reads events from a line-oriented JSON stream.
pub struct JsonLinesSource<R: BufRead> {
    lines: Lines<R>,
    line_number: usize,
    failed: bool,
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for JsonLinesSource<R> {
    type Item = Result<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(Error::Io(e)));
                }
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                continue;
            }

            let parsed: Result<Event> = serde_json::from_str(&line).map_err(|e| Error::MalformedEvent {
                position: format!("line {}", self.line_number),
                message: e.to_string(),
            });
            self.failed = parsed.is_err();
            return Some(parsed);
        }
    }
}

/// Writes `events` as JSON lines.
pub fn write_json_events<'a, W, I>(mut out: W, events: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Event>,
{
    for event in events {
        serde_json::to_writer(&mut out, event).map_err(std::io::Error::from)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
