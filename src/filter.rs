//! Table inclusion and exclusion policy.

use crate::error::{Error, Result};
use std::collections::HashSet;

/// Which tables a conversion run should render.
///
/// # Variants
/// * `All` - Render every table
/// * `Include` - Render only the named tables
/// * `Exclude` - Render every table except the named ones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableFilter {
    #[default]
    All,
    Include(HashSet<String>),
    Exclude(HashSet<String>),
}

impl TableFilter {
    /// Builds a filter from the `--include` and `--exclude` lists.
    ///
    /// Fails with [`Error::ConflictingFilters`] when both lists are non-empty.
    pub fn from_lists(include: &[String], exclude: &[String]) -> Result<Self> {
        match (include.is_empty(), exclude.is_empty()) {
            (true, true) => Ok(TableFilter::All),
            (false, true) => Ok(TableFilter::Include(include.iter().cloned().collect())),
            (true, false) => Ok(TableFilter::Exclude(exclude.iter().cloned().collect())),
            (false, false) => Err(Error::ConflictingFilters),
        }
    }

    /// Returns true if the table called `name` should be discarded.
    pub fn suppresses(&self, name: &str) -> bool {
        match self {
            TableFilter::All => false,
            TableFilter::Include(names) => !names.contains(name),
            TableFilter::Exclude(names) => names.contains(name),
        }
    }
}
