//! CLI interface definitions for the `trace2csv` application.
//!
//! This module defines command-line arguments using [`clap`]. The parsed
//! [`Args`] are validated and frozen into a [`Config`](crate::config::Config)
//! before any event is processed.
//!
//! # Example
//!
//! ```bash
//! trace2csv run.jsonl --colsep '\t' --include Summary --output run.tsv
//! ```

use crate::source::InputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Command-line arguments for the `trace2csv` converter.
///
/// Positional inputs are collected into a list so that a missing or extra
/// input file can be reported with a dedicated message.
#[derive(Parser, Debug, Default)]
#[command(name = "trace2csv", version, about)]
pub struct Args {
    /// Recorded trace event file to convert
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Column separator; accepts \t, \n, \r, \\, \' and \" escapes
    #[arg(short = 'c', long, value_name = "STRING", default_value = ",")]
    pub colsep: String,

    /// Render only the named table (may be repeated)
    #[arg(short = 'i', long, value_name = "TABLE", action = ArgAction::Append)]
    pub include: Vec<String>,

    /// Skip the named table (may be repeated)
    #[arg(short = 'e', long, value_name = "TABLE", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// Output only table names
    #[arg(short = 'l', long, default_value_t = false)]
    pub list: bool,

    /// Encoding of the input file
    #[arg(short = 'f', long, value_enum, default_value_t = InputFormat::Auto)]
    pub input_format: InputFormat,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}
