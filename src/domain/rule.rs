use anyhow::{Context, Result};
use regex::{NoExpand, Regex};

/// A (pattern, replacement) pair applied to whole-file text.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pattern: Regex,
    replacement: String,
}

impl SubstitutionRule {
    /// Compile `pattern` as a regular expression.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid substitution pattern: {}", pattern))?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Match `needle` as a plain substring.
    pub fn literal(needle: &str, replacement: impl Into<String>) -> Result<Self> {
        Self::new(&regex::escape(needle), replacement)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every non-overlapping match. The replacement is inserted
    /// verbatim (`$1` is not expanded). Returns the new text and the match count.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = self.pattern.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        let replaced = self
            .pattern
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned();
        (replaced, count)
    }
}

/// Rules applied in order to the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<SubstitutionRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Thread `text` through every rule. Returns the final text and the
    /// per-rule match counts, in rule order.
    pub fn apply(&self, text: &str) -> (String, Vec<usize>) {
        let mut buffer = text.to_string();
        let mut counts = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            let (next, count) = rule.apply(&buffer);
            buffer = next;
            counts.push(count);
        }
        (buffer, counts)
    }
}

impl FromIterator<SubstitutionRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = SubstitutionRule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
