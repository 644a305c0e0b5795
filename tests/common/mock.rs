//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Result, anyhow, bail};
use batch_rewrite::domain::ports::{FileStore, ProgressSink};
use batch_rewrite::domain::rewriter::FileOutcome;

/// In-memory FileStore. Records every read and write in call order.
pub struct MockFileStore {
    dirs: BTreeSet<PathBuf>,
    files: Mutex<BTreeMap<PathBuf, String>>,
    failing_reads: BTreeSet<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
    log: Mutex<Vec<String>>,
}

impl MockFileStore {
    pub fn new() -> Self {
        Self {
            dirs: BTreeSet::new(),
            files: Mutex::new(BTreeMap::new()),
            failing_reads: BTreeSet::new(),
            failing_writes: BTreeSet::new(),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn with_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dirs.insert(dir.as_ref().to_path_buf());
        self
    }

    /// Adds the file and its parent directory.
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            self.dirs.insert(parent.to_path_buf());
        }
        self.files.get_mut().unwrap().insert(path, content.into());
        self
    }

    pub fn failing_read(mut self, path: impl AsRef<Path>) -> Self {
        self.failing_reads.insert(path.as_ref().to_path_buf());
        self
    }

    pub fn failing_write(mut self, path: impl AsRef<Path>) -> Self {
        self.failing_writes.insert(path.as_ref().to_path_buf());
        self
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        self.files.lock().unwrap().clone()
    }

    /// Entries like `read cmd/a.go` / `write cmd/a.go`.
    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    pub fn writes(&self) -> usize {
        self.log().iter().filter(|l| l.starts_with("write ")).count()
    }

    fn record(&self, op: &str, path: &Path) {
        self.log
            .lock()
            .unwrap()
            .push(format!("{} {}", op, path.display()));
    }
}

impl Default for MockFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStore for MockFileStore {
    fn list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !self.dirs.contains(dir) {
            bail!("No such directory: {}", dir.display());
        }
        // Reverse order: callers must not rely on listing order.
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .rev()
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.record("read", path);
        if self.failing_reads.contains(path) {
            bail!("Permission denied: {}", path.display());
        }
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.record("write", path);
        if self.failing_writes.contains(path) {
            bail!("Read-only file: {}", path.display());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// ProgressSink that records lines the way the console adapter prints them.
#[derive(Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
}

impl ProgressSink for RecordingProgress {
    fn started(&mut self, path: &Path) -> Result<()> {
        self.lines.push(format!("Processing {}", path.display()));
        Ok(())
    }

    fn finished(&mut self, outcome: &FileOutcome) -> Result<()> {
        self.lines.push(format!("Updated {}", outcome.path.display()));
        Ok(())
    }
}

/// ProgressSink whose output channel is gone.
#[derive(Default)]
pub struct BrokenProgress;

impl ProgressSink for BrokenProgress {
    fn started(&mut self, path: &Path) -> Result<()> {
        bail!("stdout closed while reporting {}", path.display())
    }

    fn finished(&mut self, _outcome: &FileOutcome) -> Result<()> {
        Ok(())
    }
}
