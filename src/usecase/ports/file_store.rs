use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStoreError {
    NotFound(String),
    Message(String),
}

impl std::fmt::Display for FileStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileStoreError::NotFound(path) => write!(f, "file not found: {path}"),
            FileStoreError::Message(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for FileStoreError {}

/// Whole-file byte access for import and export.
pub trait FileStore: Send + Sync {
    fn read(&self, path: &Path) -> Result<Vec<u8>, FileStoreError>;
    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), FileStoreError>;
}
