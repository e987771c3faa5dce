//! Error types for trace2csv

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running a conversion
#[derive(Error, Debug)]
pub enum Error {
    /// No input file was given on the command line
    #[error("The name of a trace event file must be specified")]
    MissingInput,

    /// More than one input file was given
    #[error("Only a single input file is allowed to be specified")]
    TooManyInputs,

    /// Both an include list and an exclude list were given
    #[error("Only one of --include (-i) and --exclude (-e) may be specified")]
    ConflictingFilters,

    /// Unrecognized or unterminated escape sequence in a separator
    #[error("Unrecognized escape sequence \"{sequence}\" in \"{input}\"")]
    InvalidEscape { sequence: String, input: String },

    /// The output file could not be created
    #[error("Failed to open {} for writing: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input file could not be opened
    #[error("Failed to open {} for reading: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A recorded event could not be decoded
    #[error("Malformed event at {position}: {message}")]
    MalformedEvent { position: String, message: String },

    /// An event arrived that is not valid in the current table state
    #[error("Unexpected {event} event while {state}")]
    UnexpectedEvent {
        event: &'static str,
        state: &'static str,
    },

    /// The event source reported a fatal decode failure
    #[error("{0}")]
    Decode(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;
