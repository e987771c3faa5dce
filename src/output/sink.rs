//! Output destinations for rendered text.
//!
//! A sink is either the process's standard output or a file created (and
//! truncated) for the run. Both are buffered; callers flush explicitly on
//! every exit path, and dropping the sink flushes as well.

use crate::error::{Error, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

/// Where the rendered text should go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("standard output"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A forward-only writable destination.
pub enum OutputSink {
    Stdout(BufWriter<Stdout>),
    File(BufWriter<File>),
}

impl OutputSink {
    /// Acquires the sink described by `target`.
    ///
    /// # Returns
    /// * `Result<OutputSink>` - The open sink, or [`Error::OutputOpen`] if the
    ///   file cannot be created
    pub fn open(target: &OutputTarget) -> Result<Self> {
        match target {
            OutputTarget::Stdout => Ok(OutputSink::Stdout(BufWriter::new(io::stdout()))),
            OutputTarget::File(path) => Self::create(path),
        }
    }

    fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|source| Error::OutputOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(OutputSink::File(BufWriter::new(file)))
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputSink::Stdout(w) => w.write(buf),
            OutputSink::File(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            OutputSink::Stdout(w) => w.write_all(buf),
            OutputSink::File(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputSink::Stdout(w) => w.flush(),
            OutputSink::File(w) => w.flush(),
        }
    }
}
