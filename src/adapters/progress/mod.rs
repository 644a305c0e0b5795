//! Progress reporting adapters
//!
//! `ConsoleProgress` prints the human-readable lifecycle lines on stdout.
//! `SilentProgress` is used when stdout carries machine-readable output.

mod console;

pub use console::ConsoleProgress;

use crate::domain::ports::ProgressSink;
use crate::domain::rewriter::FileOutcome;
use anyhow::Result;
use std::path::Path;

/// Discards progress events
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn started(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn finished(&mut self, _outcome: &FileOutcome) -> Result<()> {
        Ok(())
    }
}
