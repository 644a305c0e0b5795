use crate::domain::ports::FileStore;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File system store implementation
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileStore;

impl FsFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for FsFileStore {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry =
                entry.with_context(|| format!("Failed to read entry in: {}", dir.display()))?;
            let path = entry.path();
            // Follows symlinks. Entries that cannot be stat'ed are kept so the
            // read reports the real error.
            match std::fs::metadata(&path) {
                Ok(meta) if !meta.is_file() => continue,
                _ => files.push(path),
            }
        }
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}
