use crate::domain::rewriter::BatchRewriter;
use crate::domain::rule::{RuleSet, SubstitutionRule};
use anyhow::{Context as _, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DIRECTORY: &str = "cmd";
pub const DEFAULT_EXTENSION: &str = ".go";

/// One substitution as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub pattern: String,
    pub replacement: String,
    /// Treat `pattern` as plain text instead of a regular expression.
    #[serde(default)]
    pub literal: bool,
}

impl RuleSpec {
    pub fn regex(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            literal: false,
        }
    }

    pub fn compile(&self) -> Result<SubstitutionRule> {
        if self.literal {
            SubstitutionRule::literal(&self.pattern, self.replacement.as_str())
        } else {
            SubstitutionRule::new(&self.pattern, self.replacement.as_str())
        }
    }
}

/// Directory, extension filter and ordered rule list for one run.
///
/// The default reproduces the sanoja package move: files in `cmd/` leave
/// `package commands` for `package main`, and imports of
/// `.../cmd/cli/commands` are repointed at `.../cmd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    pub directory: PathBuf,
    pub extension: String,
    pub rules: Vec<RuleSpec>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            extension: DEFAULT_EXTENSION.to_string(),
            rules: vec![
                RuleSpec::regex("package commands", "package main"),
                RuleSpec::regex(
                    r"github\.com/mjlefevre/sanoja/cmd/cli/commands",
                    "github.com/mjlefevre/sanoja/cmd",
                ),
            ],
        }
    }
}

impl RewriteConfig {
    /// Load a JSON config file. Absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            bail!("extension must not be empty");
        }
        Ok(())
    }

    /// Compile every rule. Fails on the first invalid pattern.
    pub fn build_rewriter(&self) -> Result<BatchRewriter> {
        self.validate()?;
        let rules = self
            .rules
            .iter()
            .enumerate()
            .map(|(i, spec)| spec.compile().with_context(|| format!("rule #{}", i + 1)))
            .collect::<Result<Vec<_>>>()?;
        Ok(BatchRewriter::new(
            RuleSet::new(rules),
            self.extension.clone(),
        ))
    }
}
