//! Validated, immutable settings for one conversion run.

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::escape::expand_escapes;
use crate::filter::TableFilter;
use crate::output::OutputTarget;
use crate::source::InputFormat;
use std::path::PathBuf;

/// Settings for a conversion run, built once from [`Args`].
///
/// # Fields
/// * `input` - The recorded event file to read
/// * `input_format` - How the input is encoded
/// * `output` - Standard output or a file path
/// * `separator` - Literal field separator, escapes already expanded
/// * `filter` - Which tables to render
/// * `names_only` - Write only table names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub input_format: InputFormat,
    pub output: OutputTarget,
    pub separator: String,
    pub filter: TableFilter,
    pub names_only: bool,
}

impl Config {
    /// Validates `args` and builds a [`Config`].
    ///
    /// # Returns
    /// * `Result<Config>` - The configuration, or a usage error:
    ///   [`Error::MissingInput`], [`Error::TooManyInputs`],
    ///   [`Error::ConflictingFilters`] or [`Error::InvalidEscape`]
    pub fn from_args(args: &Args) -> Result<Self> {
        let input = match args.inputs.as_slice() {
            [single] => single.clone(),
            [] => return Err(Error::MissingInput),
            _ => return Err(Error::TooManyInputs),
        };

        let separator = expand_escapes(&args.colsep)?;
        let filter = TableFilter::from_lists(&args.include, &args.exclude)?;
        let output = match &args.output {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        };

        Ok(Self {
            input,
            input_format: args.input_format,
            output,
            separator,
            filter,
            names_only: args.list,
        })
    }
}
