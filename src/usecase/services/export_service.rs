use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::entities::source::{export_file_name, SourceFile};
use crate::domain::entities::table::Table;
use crate::infra::csv::writer::write_table;
use crate::usecase::ports::file_store::FileStore;

pub struct ExportService {
    files: Arc<dyn FileStore>,
}

impl ExportService {
    pub fn new(files: Arc<dyn FileStore>) -> Self {
        Self { files }
    }

    pub fn render(&self, table: &Table) -> Result<Vec<u8>> {
        write_table(table)
    }

    pub fn file_name(&self, source: Option<&SourceFile>) -> String {
        export_file_name(source)
    }

    /// Write the table to `path` and return the number of bytes written.
    pub fn export_to_path(&self, table: &Table, path: &Path) -> Result<usize> {
        let bytes = self.render(table)?;
        self.files
            .write(path, &bytes)
            .with_context(|| format!("failed to save csv: {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            rows = table.row_count(),
            bytes = bytes.len(),
            "exported csv"
        );
        Ok(bytes.len())
    }
}
