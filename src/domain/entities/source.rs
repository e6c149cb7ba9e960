use std::path::Path;

const FALLBACK_STEM: &str = "data";

/// Where the current table came from. Only used for labels and the export name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name }
    }

    /// File name without its extension, if there is anything left.
    pub fn stem(&self) -> Option<&str> {
        Path::new(&self.name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
    }
}

pub fn export_file_name(source: Option<&SourceFile>) -> String {
    let stem = source
        .and_then(SourceFile::stem)
        .unwrap_or(FALLBACK_STEM);
    format!("edited_{stem}.csv")
}
