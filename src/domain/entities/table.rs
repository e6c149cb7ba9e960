use crate::domain::error::IndexError;

pub type Row = Vec<String>;

/// The in-memory spreadsheet: a fixed header row plus data rows.
///
/// Every row holds exactly `headers.len()` fields. Fields are private so the
/// only ways to grow the table are [`Table::new`] (fed by the importer) and
/// [`Table::add_row`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        debug_assert!(
            rows.iter().all(|row| row.len() == headers.len()),
            "every row must match the header width"
        );
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[cfg(test)]
    pub fn row(&self, row_idx: usize) -> Option<&Row> {
        self.rows.get(row_idx)
    }

    #[cfg(test)]
    pub fn cell(&self, row_idx: usize, col_idx: usize) -> Option<&str> {
        self.rows
            .get(row_idx)
            .and_then(|row| row.get(col_idx))
            .map(String::as_str)
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when nothing has been imported (no header row).
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Row>) {
        (self.headers, self.rows)
    }

    /// Replace headers and rows in one step. Prior contents are dropped.
    pub fn set_table(&mut self, headers: Vec<String>, rows: Vec<Row>) {
        *self = Table::new(headers, rows);
    }

    pub fn edit_cell(
        &mut self,
        row_idx: usize,
        col_idx: usize,
        value: impl Into<String>,
    ) -> Result<(), IndexError> {
        let column_count = self.headers.len();
        let row_count = self.rows.len();
        let row = self.rows.get_mut(row_idx).ok_or(IndexError::Row {
            index: row_idx,
            len: row_count,
        })?;
        let cell = row.get_mut(col_idx).ok_or(IndexError::Column {
            index: col_idx,
            len: column_count,
        })?;
        *cell = value.into();
        Ok(())
    }

    /// Append a blank row sized to the header. With no headers the row is empty.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(vec![String::new(); self.headers.len()]);
        self.rows.len() - 1
    }

    pub fn delete_row(&mut self, row_idx: usize) -> Result<Row, IndexError> {
        if row_idx >= self.rows.len() {
            return Err(IndexError::Row {
                index: row_idx,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(row_idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        Table::new(
            vec!["name".to_string(), "age".to_string()],
            vec![
                vec!["Alice".to_string(), "30".to_string()],
                vec!["Bob".to_string(), "25".to_string()],
            ],
        )
    }

    fn assert_rows_match_headers(table: &Table) {
        for (idx, row) in table.rows().iter().enumerate() {
            assert_eq!(
                row.len(),
                table.column_count(),
                "row {idx} should have one field per header"
            );
        }
    }

    #[test]
    fn edit_cell_changes_only_target_field() {
        let mut table = people();
        let before = table.clone();

        table.edit_cell(0, 1, "31").expect("edit should succeed");

        assert_eq!(table.cell(0, 1), Some("31"));
        for row_idx in 0..table.row_count() {
            for col_idx in 0..table.column_count() {
                if (row_idx, col_idx) != (0, 1) {
                    assert_eq!(
                        table.cell(row_idx, col_idx),
                        before.cell(row_idx, col_idx),
                        "cell ({row_idx}, {col_idx}) should be untouched"
                    );
                }
            }
        }
        assert_eq!(table.headers(), before.headers(), "headers never change");
    }

    #[test]
    fn edit_cell_accepts_empty_value() {
        let mut table = people();
        table.edit_cell(1, 0, "").expect("edit should succeed");
        assert_eq!(table.cell(1, 0), Some(""));
    }

    #[test]
    fn edit_cell_rejects_out_of_range_row() {
        let mut table = people();
        let before = table.clone();

        let err = table.edit_cell(2, 0, "x").expect_err("row 2 does not exist");

        assert_eq!(err, IndexError::Row { index: 2, len: 2 });
        assert_eq!(table, before, "failed edit must not change the table");
    }

    #[test]
    fn edit_cell_rejects_out_of_range_column() {
        let mut table = people();
        let before = table.clone();

        let err = table.edit_cell(0, 2, "x").expect_err("column 2 does not exist");

        assert_eq!(err, IndexError::Column { index: 2, len: 2 });
        assert_eq!(table, before, "failed edit must not change the table");
    }

    #[test]
    fn add_row_appends_blank_row_with_header_width() {
        let mut table = people();

        let idx = table.add_row();

        assert_eq!(idx, 2);
        assert_eq!(table.row(2), Some(&vec![String::new(), String::new()]));
        assert_rows_match_headers(&table);
    }

    #[test]
    fn add_row_on_empty_table_appends_zero_field_row() {
        let mut table = Table::default();

        table.add_row();

        assert_eq!(table.row_count(), 1);
        assert!(table.rows()[0].is_empty(), "degenerate row should be empty");
    }

    #[test]
    fn add_then_delete_last_restores_rows() {
        let mut table = people();
        let before = table.clone();

        table.add_row();
        let last = table.row_count() - 1;
        table.delete_row(last).expect("delete should succeed");

        assert_eq!(table, before);
    }

    #[test]
    fn delete_row_keeps_relative_order() {
        let mut table = people();
        table.add_row();
        table.edit_cell(2, 0, "Carol").expect("edit should succeed");

        let removed = table.delete_row(1).expect("delete should succeed");

        assert_eq!(removed, vec!["Bob".to_string(), "25".to_string()]);
        let names: Vec<&str> = table.rows().iter().map(|row| row[0].as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn delete_row_rejects_out_of_range() {
        let mut table = people();

        let err = table.delete_row(5).expect_err("row 5 does not exist");

        assert_eq!(err, IndexError::Row { index: 5, len: 2 });
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn set_table_replaces_previous_contents() {
        let mut table = people();

        table.set_table(vec!["x".to_string()], vec![vec!["1".to_string()]]);

        assert_eq!(table.headers(), ["x".to_string()]);
        assert_eq!(table.rows(), [vec!["1".to_string()]]);
    }

    #[test]
    fn mixed_mutations_preserve_row_width() {
        let mut table = people();
        for step in 0..20 {
            match step % 4 {
                0 => {
                    table.add_row();
                }
                1 => {
                    let last = table.row_count() - 1;
                    table
                        .edit_cell(last, step % 2, format!("v{step}"))
                        .expect("edit should succeed");
                }
                2 => {
                    table.delete_row(0).expect("delete should succeed");
                }
                _ => {
                    table.add_row();
                    table.add_row();
                }
            }
            assert_rows_match_headers(&table);
        }
    }
}
