//! CSV import using the csv crate.
//!
//! The first record becomes the header row, every later record a data row
//! padded or truncated to the header width. Blank lines are skipped.

use csv::ReaderBuilder;

use crate::domain::entities::table::{Row, Table};
use crate::domain::error::ParseError;

const BOM: char = '\u{feff}';

pub fn parse_table(bytes: &[u8]) -> Result<Table, ParseError> {
    let text = std::str::from_utf8(bytes).map_err(|err| ParseError::Encoding {
        offset: err.valid_up_to(),
    })?;
    let text = text.strip_prefix(BOM).unwrap_or(text);

    // The tokenizer closes an open quote at end of input without complaint.
    if let Some(line) = find_unterminated_quote(text) {
        return Err(ParseError::UnterminatedQuote { line });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let headers: Vec<String> = match records.next() {
        None => return Ok(Table::default()),
        Some(record) => record
            .map_err(malformed)?
            .iter()
            .map(str::to_string)
            .collect(),
    };

    let width = headers.len();
    let mut rows: Vec<Row> = Vec::new();
    for record in records {
        let record = record.map_err(malformed)?;
        if record.len() != width {
            tracing::warn!(
                line = record.position().map(|pos| pos.line()),
                fields = record.len(),
                expected = width,
                "record width differs from header, normalizing"
            );
        }
        rows.push(
            (0..width)
                .map(|col_idx| record.get(col_idx).unwrap_or("").to_string())
                .collect(),
        );
    }

    Ok(Table::new(headers, rows))
}

fn malformed(err: csv::Error) -> ParseError {
    ParseError::Malformed {
        line: err.position().map(|pos| pos.line()),
        message: err.to_string(),
    }
}

/// Line on which a quoted field opens without ever closing, if any.
///
/// A quote only opens a field when it is the first character of that field;
/// quotes elsewhere in an unquoted field are literal text.
fn find_unterminated_quote(text: &str) -> Option<usize> {
    let mut chars = text.chars().peekable();
    let mut line = 1;
    let mut open_line = None;
    let mut at_field_start = true;

    while let Some(ch) = chars.next() {
        if open_line.is_some() {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                }
                '"' => open_line = None,
                '\n' => line += 1,
                '\r' if chars.peek() != Some(&'\n') => line += 1,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if at_field_start => {
                open_line = Some(line);
                at_field_start = false;
            }
            ',' => at_field_start = true,
            '\r' => {
                at_field_start = true;
                // A lone CR ends a record just like LF does.
                if chars.peek() != Some(&'\n') {
                    line += 1;
                }
            }
            '\n' => {
                at_field_start = true;
                line += 1;
            }
            _ => at_field_start = false,
        }
    }

    open_line
}
