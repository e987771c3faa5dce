//! Event-driven rendering of trace tables into delimited text.
//!
//! [`Renderer`] receives one [`Event`] at a time and writes the matching
//! fields, separators and newlines straight to its sink. It keeps only a
//! small amount of session state: whether a table is open (and whether it is
//! suppressed), how many tables have been rendered so far, and the column
//! index within the current row.
//!
//! # Output layout
//!
//! ```text
//! "Stats"            <- quoted table name
//! "Name","Count"     <- header row of quoted column names
//! "x""y",42          <- data rows
//!                    <- blank line before the next rendered table
//! "Other"
//! ```
//!
//! Suppression is decided once per table when it begins. Events belonging
//! to a suppressed table are no-ops, so memory use does not depend on table
//! size.

use crate::config::Config;
use crate::data::{Event, Value};
use crate::error::{Error, Result};
use crate::filter::TableFilter;
use crate::output::write_quoted;
use log::debug;
use std::io::Write;

/// Where the renderer currently is in the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Between tables
    Idle,
    /// Inside a table; `suppressed` is fixed until the table ends
    Open { suppressed: bool },
}

impl TableState {
    fn as_str(&self) -> &'static str {
        match self {
            TableState::Idle => "between tables",
            TableState::Open { .. } => "inside a table",
        }
    }
}

/// Counters collected over one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Tables announced by the event source
    pub tables_seen: usize,
    /// Tables whose header and rows were written
    pub tables_rendered: usize,
    /// Tables discarded by the filter or by names-only mode
    pub tables_suppressed: usize,
    /// Header and data rows written
    pub rows_written: usize,
}

/// Formatting options for a [`Renderer`], taken from the run's [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub separator: String,
    pub filter: TableFilter,
    pub names_only: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            separator: ",".to_string(),
            filter: TableFilter::All,
            names_only: false,
        }
    }
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            separator: config.separator.clone(),
            filter: config.filter.clone(),
            names_only: config.names_only,
        }
    }
}

/// The rendering state machine.
pub struct Renderer<W: Write> {
    out: W,
    options: RenderOptions,
    state: TableState,
    table_ordinal: usize,
    column: usize,
    summary: RenderSummary,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, options: RenderOptions) -> Self {
        Self {
            out,
            options,
            state: TableState::Idle,
            table_ordinal: 0,
            column: 0,
            summary: RenderSummary::default(),
        }
    }

    /// Current table state.
    pub fn state(&self) -> TableState {
        self.state
    }

    /// Counters collected so far.
    pub fn summary(&self) -> RenderSummary {
        self.summary
    }

    /// Processes a single event.
    ///
    /// # Returns
    /// * `Result<()>` - Ok if the event was handled; [`Error::Decode`] for an
    ///   `Error` event, [`Error::UnexpectedEvent`] for an event that is not
    ///   valid in the current state, or [`Error::Io`] if writing failed
    pub fn handle(&mut self, event: Event) -> Result<()> {
        match (self.state, event) {
            (_, Event::Error { message }) => Err(Error::Decode(message)),

            (TableState::Idle, Event::TableBegin { name, .. }) => self.begin_table(&name),
            (TableState::Open { .. }, Event::TableEnd) => {
                self.state = TableState::Idle;
                Ok(())
            }

            // Everything else inside a suppressed table is dropped
            (TableState::Open { suppressed: true }, Event::TableBegin { .. }) => {
                Err(self.unexpected("table_begin"))
            }
            (TableState::Open { suppressed: true }, _) => Ok(()),

            (TableState::Open { suppressed: false }, Event::RowBegin) => {
                self.column = 0;
                Ok(())
            }
            (TableState::Open { suppressed: false }, Event::ColumnDeclare { name, .. }) => {
                self.separate()?;
                write_quoted(&mut self.out, &name)?;
                Ok(())
            }
            (TableState::Open { suppressed: false }, Event::CellValue(value)) => {
                self.separate()?;
                self.write_value(&value)
            }
            (TableState::Open { suppressed: false }, Event::RowEnd) => {
                self.out.write_all(b"\n")?;
                self.summary.rows_written += 1;
                Ok(())
            }
            (TableState::Open { suppressed: false }, Event::TableBegin { .. }) => {
                Err(self.unexpected("table_begin"))
            }

            (TableState::Idle, other) => Err(self.unexpected(other.as_str())),
        }
    }

    /// Flushes the sink and returns it together with the run's counters.
    pub fn finish(mut self) -> Result<(W, RenderSummary)> {
        self.out.flush()?;
        Ok((self.out, self.summary))
    }

    /// Flushes whatever has been written so far.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn begin_table(&mut self, name: &str) -> Result<()> {
        self.summary.tables_seen += 1;

        if self.options.filter.suppresses(name) {
            debug!("Suppressing table {:?}", name);
            self.summary.tables_suppressed += 1;
            self.state = TableState::Open { suppressed: true };
            return Ok(());
        }

        if self.options.names_only {
            self.summary.tables_suppressed += 1;
            self.state = TableState::Open { suppressed: true };
        } else {
            if self.table_ordinal > 0 {
                self.out.write_all(b"\n")?;
            }
            self.table_ordinal += 1;
            self.summary.tables_rendered += 1;
            self.state = TableState::Open { suppressed: false };
        }

        write_quoted(&mut self.out, name)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    /// Writes the separator unless this is the first field of the row.
    fn separate(&mut self) -> Result<()> {
        if self.column > 0 {
            self.out.write_all(self.options.separator.as_bytes())?;
        }
        self.column += 1;
        Ok(())
    }

    fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Uint64(n) => write!(self.out, "{}", n)?,
            Value::String(s) => write_quoted(&mut self.out, s)?,
            Value::Bool(true) => self.out.write_all(b"TRUE")?,
            Value::Bool(false) => self.out.write_all(b"FALSE")?,
        }
        Ok(())
    }

    fn unexpected(&self, event: &'static str) -> Error {
        Error::UnexpectedEvent {
            event,
            state: self.state.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ColumnType, TableKind};

    fn render(events: Vec<Event>, options: RenderOptions) -> (String, RenderSummary) {
        let mut renderer = Renderer::new(Vec::new(), options);
        for event in events {
            renderer.handle(event).unwrap();
        }
        let (buf, summary) = renderer.finish().unwrap();
        (String::from_utf8(buf).unwrap(), summary)
    }

    fn table(name: &str, columns: &[&str], rows: &[Vec<Value>]) -> Vec<Event> {
        let mut events = vec![Event::table(name), Event::RowBegin];
        for column in columns {
            events.push(Event::column(ColumnType::String, column));
        }
        events.push(Event::RowEnd);
        for row in rows {
            events.push(Event::RowBegin);
            events.extend(row.iter().cloned().map(Event::CellValue));
            events.push(Event::RowEnd);
        }
        events.push(Event::TableEnd);
        events
    }

    #[test]
    fn test_single_string_table() {
        let events = table(
            "Stats",
            &["Name"],
            &[vec![Value::String("x\"y".to_string())]],
        );
        let (text, summary) = render(events, RenderOptions::default());

        assert_eq!(text, "\"Stats\"\n\"Name\"\n\"x\"\"y\"\n");
        assert_eq!(summary.tables_rendered, 1);
        assert_eq!(summary.rows_written, 2);
    }

    #[test]
    fn test_value_rendering() {
        let events = table(
            "Mixed",
            &["Count", "Label", "Flag", "Off"],
            &[vec![
                Value::Uint64(18446744073709551615),
                Value::String("-3".to_string()),
                Value::Bool(true),
                Value::Bool(false),
            ]],
        );
        let (text, _) = render(events, RenderOptions::default());

        assert_eq!(
            text,
            "\"Mixed\"\n\"Count\",\"Label\",\"Flag\",\"Off\"\n18446744073709551615,=\"-3\",TRUE,FALSE\n"
        );
    }

    #[test]
    fn test_blank_line_between_tables() {
        let mut events = table("A", &["x"], &[vec![Value::Uint64(1)]]);
        events.extend(table("B", &["y"], &[vec![Value::Uint64(2)]]));
        let (text, _) = render(events, RenderOptions::default());

        assert_eq!(text, "\"A\"\n\"x\"\n1\n\n\"B\"\n\"y\"\n2\n");
    }

    #[test]
    fn test_custom_separator() {
        let events = table(
            "T",
            &["a", "b", "c"],
            &[vec![Value::Uint64(1), Value::Uint64(2), Value::Uint64(3)]],
        );
        let options = RenderOptions {
            separator: "\t".to_string(),
            ..RenderOptions::default()
        };
        let (text, _) = render(events, options);

        assert_eq!(text, "\"T\"\n\"a\"\t\"b\"\t\"c\"\n1\t2\t3\n");
    }

    #[test]
    fn test_names_only() {
        let mut events = table("A", &["x"], &[vec![Value::Uint64(1)]]);
        events.extend(table("B", &["y"], &[vec![Value::Uint64(2)]]));
        let options = RenderOptions {
            names_only: true,
            ..RenderOptions::default()
        };
        let (text, summary) = render(events, options);

        assert_eq!(text, "\"A\"\n\"B\"\n");
        assert_eq!(summary.tables_rendered, 0);
        assert_eq!(summary.rows_written, 0);
    }

    #[test]
    fn test_suppressed_table_takes_no_separator_slot() {
        let mut events = table("Y", &["y"], &[vec![Value::Uint64(2)]]);
        events.extend(table("X", &["x"], &[vec![Value::Uint64(1)]]));
        let options = RenderOptions {
            filter: TableFilter::from_lists(&["X".to_string()], &[]).unwrap(),
            ..RenderOptions::default()
        };
        let (text, summary) = render(events, options);

        assert_eq!(text, "\"X\"\n\"x\"\n1\n");
        assert_eq!(summary.tables_seen, 2);
        assert_eq!(summary.tables_suppressed, 1);
    }

    #[test]
    fn test_key_value_tables_render_like_basic() {
        let events = vec![
            Event::TableBegin {
                kind: TableKind::KeyValue,
                name: "Summary".to_string(),
            },
            Event::RowBegin,
            Event::column(ColumnType::Uint64, "Total"),
            Event::RowEnd,
            Event::RowBegin,
            Event::CellValue(Value::Uint64(9)),
            Event::RowEnd,
            Event::TableEnd,
        ];
        let (text, _) = render(events, RenderOptions::default());

        assert_eq!(text, "\"Summary\"\n\"Total\"\n9\n");
    }

    #[test]
    fn test_error_event_keeps_earlier_output() {
        let mut renderer = Renderer::new(Vec::new(), RenderOptions::default());
        for event in table("A", &["x"], &[vec![Value::Uint64(1)]]) {
            renderer.handle(event).unwrap();
        }

        let result = renderer.handle(Event::Error {
            message: "truncated input".to_string(),
        });
        match result {
            Err(Error::Decode(message)) => assert_eq!(message, "truncated input"),
            other => panic!("expected Decode error, got {:?}", other),
        }

        let (buf, _) = renderer.finish().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"A\"\n\"x\"\n1\n");
    }

    #[test]
    fn test_out_of_order_events() {
        let mut renderer = Renderer::new(Vec::new(), RenderOptions::default());
        assert!(matches!(
            renderer.handle(Event::RowBegin),
            Err(Error::UnexpectedEvent {
                event: "row_begin",
                ..
            })
        ));

        renderer.handle(Event::table("A")).unwrap();
        assert!(matches!(
            renderer.handle(Event::table("B")),
            Err(Error::UnexpectedEvent {
                event: "table_begin",
                ..
            })
        ));
    }

    #[test]
    fn test_state_transitions() {
        let options = RenderOptions {
            filter: TableFilter::from_lists(&[], &["Hidden".to_string()]).unwrap(),
            ..RenderOptions::default()
        };
        let mut renderer = Renderer::new(Vec::new(), options);
        assert_eq!(renderer.state(), TableState::Idle);

        renderer.handle(Event::table("Hidden")).unwrap();
        assert_eq!(renderer.state(), TableState::Open { suppressed: true });
        renderer.handle(Event::RowBegin).unwrap();
        renderer.handle(Event::RowEnd).unwrap();
        renderer.handle(Event::TableEnd).unwrap();
        assert_eq!(renderer.state(), TableState::Idle);

        renderer.handle(Event::table("Shown")).unwrap();
        assert_eq!(renderer.state(), TableState::Open { suppressed: false });
        assert_eq!(renderer.summary().tables_rendered, 1);
    }
}
