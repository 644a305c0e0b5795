use crate::domain::ports::{FileStore, ProgressSink};
use crate::domain::rule::RuleSet;
use anyhow::{Context as _, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Result of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Content differs from what was read.
    pub changed: bool,
    /// Match count per rule, in rule order.
    pub replacements: Vec<usize>,
    /// The new content was written back (false only in dry-run).
    pub written: bool,
}

impl FileOutcome {
    pub fn total_replacements(&self) -> usize {
        self.replacements.iter().sum()
    }
}

/// Applies a rule set to every file in one directory whose name ends with
/// `extension`.
///
/// Each file is read once, transformed in memory and written back once.
/// The first failure aborts the run; files processed before it stay rewritten.
#[derive(Debug, Clone)]
pub struct BatchRewriter {
    rules: RuleSet,
    extension: String,
}

impl BatchRewriter {
    pub fn new(rules: RuleSet, extension: impl Into<String>) -> Self {
        Self {
            rules,
            extension: extension.into(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The File Set: matching entries of `dir`, sorted by path.
    pub fn select(&self, store: &dyn FileStore, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = store
            .list(dir)
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?
            .into_iter()
            .filter(|path| self.matches(path))
            .collect();
        files.sort();
        Ok(files)
    }

    fn matches(&self, path: &Path) -> bool {
        // Byte comparison, so names that are not valid UTF-8 still match.
        path.file_name()
            .is_some_and(|name| name.as_encoded_bytes().ends_with(self.extension.as_bytes()))
    }

    /// Read, transform and write back one file. The write happens even when
    /// nothing matched, unless `dry_run` is set.
    pub fn rewrite_file(
        &self,
        store: &dyn FileStore,
        path: &Path,
        dry_run: bool,
    ) -> Result<FileOutcome> {
        let original = store.read(path)?;
        let (content, replacements) = self.rules.apply(&original);
        let changed = content != original;

        if !dry_run {
            store.write(path, &content)?;
        }

        Ok(FileOutcome {
            path: path.to_path_buf(),
            changed,
            replacements,
            written: !dry_run,
        })
    }

    /// Run the batch over `dir`, sequentially, reporting to `sink`.
    pub fn run(
        &self,
        store: &dyn FileStore,
        dir: &Path,
        sink: &mut dyn ProgressSink,
        dry_run: bool,
    ) -> Result<Vec<FileOutcome>> {
        let files = self.select(store, dir)?;
        tracing::debug!(
            dir = %dir.display(),
            count = files.len(),
            extension = %self.extension,
            "selected files"
        );

        let mut outcomes = Vec::with_capacity(files.len());
        for path in files {
            sink.started(&path)?;
            let outcome = self
                .rewrite_file(store, &path, dry_run)
                .with_context(|| format!("Failed to rewrite {}", path.display()))?;
            sink.finished(&outcome)?;
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }
}
