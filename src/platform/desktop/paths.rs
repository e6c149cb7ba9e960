use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "csv-editor")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

fn ensure_subdir(base_data_dir: &Path, name: &str) -> Result<PathBuf> {
    let dir = base_data_dir.join(name);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;
    Ok(dir)
}

/// Data directory handed to the desktop webview.
pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_subdir(project_dirs()?.data_local_dir(), "webview2")
}

pub fn default_logs_dir() -> Result<PathBuf> {
    ensure_subdir(project_dirs()?.data_local_dir(), "logs")
}
