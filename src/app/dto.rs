use crate::domain::rewriter::FileOutcome;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RewriteRequest {
    /// Overrides the configured directory.
    pub directory: Option<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteSummary {
    pub directory: PathBuf,
    pub extension: String,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
}

impl RewriteSummary {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn changed_count(&self) -> usize {
        self.files.iter().filter(|f| f.changed).count()
    }

    pub fn total_replacements(&self) -> usize {
        self.files.iter().map(FileOutcome::total_replacements).sum()
    }
}
