//! Field quoting for spreadsheet-friendly delimited text.
//!
//! Every text field is surrounded by double quotes, even though quotes are
//! strictly required only for fields containing separators. Embedded double
//! quotes are doubled, a convention both LibreOffice and Excel honor.
//! Fields starting with `-` get a leading `=` so Excel does not read them
//! as formulas; LibreOffice accepts the same form.

use std::io::{self, Write};

/// Returns the quoted form of `field`.
///
/// # Examples
///
/// ```rust
/// use trace2csv::output::quote_field;
///
/// assert_eq!(quote_field("Stats"), "\"Stats\"");
/// assert_eq!(quote_field("x\"y"), "\"x\"\"y\"");
/// assert_eq!(quote_field("-1"), "=\"-1\"");
/// ```
pub fn quote_field(field: &str) -> String {
    let mut quoted = String::with_capacity(field.len() + 3);
    if field.starts_with('-') {
        quoted.push('=');
    }
    quoted.push('"');
    for c in field.chars() {
        if c == '"' {
            quoted.push('"');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Writes the quoted form of `field` to `out` without building a `String`.
///
/// Produces exactly the bytes of [`quote_field`].
pub fn write_quoted<W: Write + ?Sized>(out: &mut W, field: &str) -> io::Result<()> {
    if field.starts_with('-') {
        out.write_all(b"=")?;
    }
    out.write_all(b"\"")?;
    let mut pieces = field.split('"');
    if let Some(first) = pieces.next() {
        out.write_all(first.as_bytes())?;
    }
    for piece in pieces {
        out.write_all(b"\"\"")?;
        out.write_all(piece.as_bytes())?;
    }
    out.write_all(b"\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(field: &str) -> String {
        let mut buf = Vec::new();
        write_quoted(&mut buf, field).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_wraps_in_quotes() {
        assert_eq!(quote_field(""), "\"\"");
        assert_eq!(quote_field("Name"), "\"Name\"");
        assert_eq!(quote_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn test_doubles_embedded_quotes() {
        assert_eq!(quote_field("x\"y"), "\"x\"\"y\"");
        assert_eq!(quote_field("\"\""), "\"\"\"\"\"\"");
    }

    #[test]
    fn test_leading_minus_gets_equals_prefix() {
        assert_eq!(quote_field("-5"), "=\"-5\"");
        assert_eq!(quote_field("-"), "=\"-\"");
        assert_eq!(quote_field("5-"), "\"5-\"");
        assert_eq!(quote_field(" -5"), "\" -5\"");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(quote_field(" a\nb\t"), "\" a\nb\t\"");
        assert_eq!(quote_field("=SUM(A1)"), "\"=SUM(A1)\"");
    }

    #[test]
    fn test_writer_matches_string_form() {
        for field in ["", "plain", "x\"y", "\"", "-\"-\"", "tail\"", "ünï\"cödé"] {
            assert_eq!(written(field), quote_field(field), "field {:?}", field);
        }
    }
}
