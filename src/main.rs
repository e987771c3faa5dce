//! Main entry point for the `trace2csv` CLI application.
//!
//! `trace2csv` converts a recorded stream of trace parse events into
//! delimited text that spreadsheet tools can open directly.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] and validates them into a [`Config`]
//! - Opens the output sink, then the input event source
//! - Drives the rendering state machine over the whole stream
//! - Reports every fatal error prefixed with the program name and exits 1
//!
//! # Flags of Interest
//! - `--colsep STRING`: field separator, with `\t`-style escapes
//! - `--include NAME` / `--exclude NAME`: select tables by name
//! - `--list`: print only table names
//! - `-v`: log progress to stderr

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use log::{debug, info};
use std::path::Path;
use std::process::ExitCode;
use trace2csv::output::OutputSink;
use trace2csv::source::open_source;
use trace2csv::{Args, Config, RenderOptions};

/// Returns the basename of the running executable, used to prefix messages.
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "trace2csv".to_string())
}

/// Sets up `env_logger` on stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Runs one conversion with a validated configuration.
fn run(config: &Config) -> Result<()> {
    debug!("Writing to {}", config.output);
    let sink = OutputSink::open(&config.output)?;

    let format = config.input_format.resolve(&config.input);
    debug!("Reading {} as {:?}", config.input.display(), format);
    let events = open_source(&config.input, format)?;

    let summary = trace2csv::convert(events, sink, RenderOptions::from(config))
        .with_context(|| format!("{}", config.input.display()))?;

    info!(
        "Rendered {} of {} tables ({} suppressed), {} rows",
        summary.tables_rendered, summary.tables_seen, summary.tables_suppressed, summary.rows_written
    );
    Ok(())
}

fn main() -> ExitCode {
    let progname = program_name();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprint!("{}: {}", progname, err);
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.verbose);

    // Parse args → Config → open sink → open source → convert
    let outcome = Config::from_args(&args)
        .map_err(anyhow::Error::from)
        .and_then(|config| run(&config));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", progname, err);
            ExitCode::FAILURE
        }
    }
}
