//! Escape-sequence expansion for user-supplied separators.
//!
//! Shells make it awkward to pass a literal tab on the command line, so
//! `--colsep` accepts `\t`, `\n`, `\r`, `\\`, `\'` and `\"`.

use crate::error::{Error, Result};

/// Expands backslash escapes in `raw` into literal characters.
///
/// # Arguments
/// * `raw` - The separator exactly as typed by the user
///
/// # Returns
/// * `Result<String>` - The expanded string, or [`Error::InvalidEscape`] if a
///   backslash is followed by an unsupported character or ends the input
pub fn expand_escapes(raw: &str) -> Result<String> {
    let mut expanded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            expanded.push(c);
            continue;
        }

        match chars.next() {
            Some(lit @ ('\\' | '\'' | '"')) => expanded.push(lit),
            Some('t') => expanded.push('\t'),
            Some('n') => expanded.push('\n'),
            Some('r') => expanded.push('\r'),
            Some(other) => {
                return Err(Error::InvalidEscape {
                    sequence: format!("\\{}", other),
                    input: raw.to_string(),
                });
            }
            None => {
                return Err(Error::InvalidEscape {
                    sequence: "\\".to_string(),
                    input: raw.to_string(),
                });
            }
        }
    }

    Ok(expanded)
}
