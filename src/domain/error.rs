use thiserror::Error;

/// Raised when dropped bytes cannot be read as delimited text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("file is not valid UTF-8 text (invalid byte at offset {offset})")]
    Encoding { offset: usize },

    #[error("quoted field opened on line {line} is never closed")]
    UnterminatedQuote { line: usize },

    /// A record the tokenizer itself refused. With UTF-8 checked up front and
    /// flexible record widths this only covers read failures inside the csv crate.
    #[error("malformed record{}: {message}", line_suffix(.line))]
    Malformed { line: Option<u64>, message: String },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" on line {line}"))
        .unwrap_or_default()
}

/// A mutation addressed a row or column the table does not have.
///
/// The grid only hands out indices it rendered, so seeing one of these means
/// the UI and the store went out of sync.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("row index {index} out of range (table has {len} rows)")]
    Row { index: usize, len: usize },

    #[error("column index {index} out of range (table has {len} columns)")]
    Column { index: usize, len: usize },
}
