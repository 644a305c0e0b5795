use crate::domain::ports::ProgressSink;
use crate::domain::rewriter::FileOutcome;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Writes `Processing <path>` / `Updated <path>` lines to a writer (stdout by default)
pub struct ConsoleProgress<W: Write = std::io::Stdout> {
    out: W,
}

impl ConsoleProgress {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, verb: &str, path: &Path) -> Result<()> {
        writeln!(self.out, "{} {}", verb, path.display())
            .with_context(|| format!("Failed to report progress for {}", path.display()))
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<W> {
    fn started(&mut self, path: &Path) -> Result<()> {
        self.line("Processing", path)
    }

    fn finished(&mut self, outcome: &FileOutcome) -> Result<()> {
        tracing::debug!(
            path = %outcome.path.display(),
            changed = outcome.changed,
            replacements = ?outcome.replacements,
            "file processed"
        );
        let verb = match (outcome.written, outcome.changed) {
            (true, _) => "Updated",
            (false, true) => "Would update",
            (false, false) => "Unchanged",
        };
        self.line(verb, &outcome.path)
    }
}
