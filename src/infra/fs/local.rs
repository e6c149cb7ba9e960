use std::io::ErrorKind;
use std::path::Path;

use crate::usecase::ports::file_store::{FileStore, FileStoreError};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl FileStore for LocalFileStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FileStoreError> {
        std::fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => FileStoreError::NotFound(path.display().to_string()),
            _ => FileStoreError::Message(format!("failed to read {}: {err}", path.display())),
        })
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileStoreError> {
        std::fs::write(path, bytes).map_err(|err| {
            FileStoreError::Message(format!("failed to write {}: {err}", path.display()))
        })
    }
}
