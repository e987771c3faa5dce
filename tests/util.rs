#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};
use trace2csv::data::{ColumnType, Event, Value};
use trace2csv::source::{write_bincode_events, write_json_events};

/// Builds the events for one basic table with string headers.
pub fn table(name: &str, columns: &[&str], rows: &[Vec<Value>]) -> Vec<Event> {
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

/// Two small tables, "A" then "B".
pub fn two_tables() -> Vec<Event> {
    let mut events = table("A", &["x"], &[vec![Value::Uint64(1)]]);
    events.extend(table("B", &["y"], &[vec![Value::Bool(true)]]));
    events
}

/// Writes `events` as JSON lines to `dir/name` and returns the path.
pub fn write_json_fixture(dir: &Path, name: &str, events: &[Event]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create fixture");
    write_json_events(file, events).expect("Failed to write fixture");
    path
}

/// Writes `events` as bincode to `dir/name` and returns the path.
pub fn write_bincode_fixture(dir: &Path, name: &str, events: &[Event]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("Failed to create fixture");
    write_bincode_events(file, events).expect("Failed to write fixture");
    path
}
