use crate::adapters::progress::{ConsoleProgress, SilentProgress};
use crate::app::config::RewriteConfig;
use crate::app::dto::{RewriteRequest, RewriteSummary};
use crate::app::engine::RewriteEngine;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "batch-rewrite",
    version,
    about = "Apply ordered regex substitutions to every matching file in a directory, in place"
)]
pub struct Cli {
    /// Directory whose files are rewritten (not recursive). Defaults to `cmd`.
    pub directory: Option<PathBuf>,

    /// File name suffix that selects files. Defaults to `.go`.
    #[arg(short, long)]
    pub ext: Option<String>,

    /// JSON file with `directory`, `extension` and `rules`.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report what would change without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary instead of progress lines.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Resolve the effective configuration: file (or defaults), then flags.
    pub fn config(&self) -> Result<RewriteConfig> {
        let mut config = match &self.config {
            Some(path) => RewriteConfig::load(path)?,
            None => RewriteConfig::default(),
        };
        if let Some(dir) = &self.directory {
            config.directory = dir.clone();
        }
        if let Some(ext) = &self.ext {
            config.extension = ext.clone();
        }
        Ok(config)
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    let engine = RewriteEngine::from_config(&config)?;
    let req = RewriteRequest {
        directory: None,
        dry_run: cli.dry_run,
    };

    if cli.json {
        let summary = engine.run(req, &mut SilentProgress)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let summary = engine.run(req, &mut ConsoleProgress::stdout())?;
        if summary.dry_run {
            print_dry_run_summary(&summary);
        }
    }
    Ok(())
}

fn print_dry_run_summary(summary: &RewriteSummary) {
    println!(
        "{} of {} file(s) would change ({} replacement(s))",
        summary.changed_count(),
        summary.file_count(),
        summary.total_replacements()
    );
}
