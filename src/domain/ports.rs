use crate::domain::rewriter::FileOutcome;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// File store port (implemented by Infrastructure)
pub trait FileStore: Send + Sync {
    /// Regular files directly inside `dir`. Not recursive; order is unspecified.
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Whole file decoded as UTF-8.
    fn read(&self, path: &Path) -> Result<String>;

    /// Truncate and overwrite.
    fn write(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Observer for the per-file lifecycle of a batch rewrite. An error aborts the run.
pub trait ProgressSink {
    fn started(&mut self, path: &Path) -> Result<()>;

    fn finished(&mut self, outcome: &FileOutcome) -> Result<()>;
}
