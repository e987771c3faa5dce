//! Data structures for representing trace parse events.
//!
//! This module defines the event vocabulary shared by the event sources and
//! the renderer. Events derive `serde` traits so that a decoded trace can be
//! recorded (as JSON lines or bincode) and replayed later.
//!
//! Enums use serde's default externally tagged representation, which both
//! `serde_json` and `bincode` understand.

use serde::{Deserialize, Serialize};

/// The kind of table announced by [`Event::TableBegin`].
///
/// # Variants
/// * `Basic` - A table with an arbitrary number of rows
/// * `KeyValue` - A table with exactly one data row
///
/// The renderer treats both kinds the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Basic,
    KeyValue,
}

/// The declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    Uint64,
    String,
    Bool,
}

/// A typed scalar carried by a [`Event::CellValue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Uint64(u64),
    String(String),
    Bool(bool),
}

/// One parse event, in the order the trace data occurs.
///
/// Header rows and data rows are both framed by `RowBegin`/`RowEnd`.
/// `ColumnDeclare` only appears in the header row, `CellValue` only in
/// data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    TableBegin { kind: TableKind, name: String },
    ColumnDeclare { column_type: ColumnType, name: String },
    RowBegin,
    CellValue(Value),
    RowEnd,
    TableEnd,
    Error { message: String },
}

impl Event {
    /// Returns a short name for the event kind, used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::TableBegin { .. } => "table_begin",
            Event::ColumnDeclare { .. } => "column_declare",
            Event::RowBegin => "row_begin",
            Event::CellValue(_) => "cell_value",
            Event::RowEnd => "row_end",
            Event::TableEnd => "table_end",
            Event::Error { .. } => "error",
        }
    }

    /// Shorthand for a basic table header.
    pub fn table(name: &str) -> Self {
        Event::TableBegin {
            kind: TableKind::Basic,
            name: name.to_string(),
        }
    }

    /// Shorthand for a column declaration.
    pub fn column(column_type: ColumnType, name: &str) -> Self {
        Event::ColumnDeclare {
            column_type,
            name: name.to_string(),
        }
    }
}
