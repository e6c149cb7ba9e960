use anyhow::{anyhow, Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::entities::table::Table;

/// Serialize the header row followed by every data row.
///
/// Fields are quoted only when they contain a comma, a quote or a line break.
/// A table without headers serializes to nothing.
pub fn write_table(table: &Table) -> Result<Vec<u8>> {
    if table.is_empty() {
        return Ok(Vec::new());
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(table.headers())
        .context("failed to write csv header")?;
    for (row_idx, row) in table.rows().iter().enumerate() {
        writer
            .write_record(row)
            .with_context(|| format!("failed to write csv row {row_idx}"))?;
    }

    writer
        .into_inner()
        .map_err(|err| anyhow!("failed to flush csv writer: {}", err.error()))
}
