use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::domain::entities::source::SourceFile;
use crate::domain::entities::table::Table;
use crate::infra::csv::reader::parse_table;
use crate::usecase::ports::file_store::FileStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedTable {
    pub table: Table,
    pub source: SourceFile,
}

pub struct ImportService {
    files: Arc<dyn FileStore>,
}

impl ImportService {
    pub fn new(files: Arc<dyn FileStore>) -> Self {
        Self { files }
    }

    pub fn import_path(&self, path: &Path) -> Result<ImportedTable> {
        let bytes = self
            .files
            .read(path)
            .with_context(|| format!("failed to open csv: {}", path.display()))?;
        self.import_source(SourceFile::from_path(path), &bytes)
    }

    /// Parse bytes that arrived without a path, e.g. from a drop event.
    pub fn import_bytes(&self, name: &str, bytes: &[u8]) -> Result<ImportedTable> {
        self.import_source(SourceFile::new(name), bytes)
    }

    fn import_source(&self, source: SourceFile, bytes: &[u8]) -> Result<ImportedTable> {
        let table = parse_table(bytes)
            .with_context(|| format!("failed to parse csv: {}", source.name))?;
        tracing::info!(
            file = %source.name,
            columns = table.column_count(),
            rows = table.row_count(),
            "imported csv"
        );
        Ok(ImportedTable { table, source })
    }
}
