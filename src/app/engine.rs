use crate::adapters::fs::FsFileStore;
use crate::app::config::RewriteConfig;
use crate::app::dto::{RewriteRequest, RewriteSummary};
use crate::domain::ports::{FileStore, ProgressSink};
use crate::domain::rewriter::BatchRewriter;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Batch rewrite wired to a concrete file store.
#[derive(Clone)]
pub struct RewriteEngine {
    directory: PathBuf,
    rewriter: BatchRewriter,
    store: Arc<dyn FileStore>,
}

impl RewriteEngine {
    /// Compile `config` against an arbitrary store.
    ///
    /// Used for testing with an in-memory store.
    pub fn new(config: &RewriteConfig, store: Arc<dyn FileStore>) -> Result<Self> {
        Ok(Self {
            directory: config.directory.clone(),
            rewriter: config.build_rewriter()?,
            store,
        })
    }

    /// Compile `config` against the real filesystem.
    pub fn from_config(config: &RewriteConfig) -> Result<Self> {
        Self::new(config, Arc::new(FsFileStore::new()))
    }

    pub fn directory(&self) -> &PathBuf {
        &self.directory
    }

    pub fn rewriter(&self) -> &BatchRewriter {
        &self.rewriter
    }

    pub fn run(&self, req: RewriteRequest, sink: &mut dyn ProgressSink) -> Result<RewriteSummary> {
        let directory = req.directory.unwrap_or_else(|| self.directory.clone());
        tracing::info!(
            dir = %directory.display(),
            rules = self.rewriter.rules().len(),
            dry_run = req.dry_run,
            "starting batch rewrite"
        );

        let files = self
            .rewriter
            .run(self.store.as_ref(), &directory, sink, req.dry_run)?;

        let summary = RewriteSummary {
            directory,
            extension: self.rewriter.extension().to_string(),
            dry_run: req.dry_run,
            files,
        };
        tracing::info!(
            files = summary.file_count(),
            changed = summary.changed_count(),
            replacements = summary.total_replacements(),
            "batch rewrite complete"
        );
        Ok(summary)
    }
}
