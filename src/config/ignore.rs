//! Ignore pattern configuration

use glob::Pattern;

use crate::constants::discovery::DEFAULT_IGNORE_PATTERNS;
use crate::error::CircularImportError;

/// The set of names and globs excluded from discovery
///
/// Built once per run from the defaults plus any user additions and passed
/// to the discoverer explicitly. A path is ignored when any of its components
/// below the project root equals a pattern or matches it as a glob.
#[derive(Debug, Clone)]
pub struct IgnorePatterns {
    patterns: Vec<(String, Pattern)>,
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::defaults()
    }
}

impl IgnorePatterns {
    /// The default ignore set
    pub fn defaults() -> Self {
        let patterns = DEFAULT_IGNORE_PATTERNS
            .iter()
            .map(|raw| {
                let pattern = Pattern::new(raw).expect("Default ignore patterns should be valid");
                (raw.to_string(), pattern)
            })
            .collect();

        Self { patterns }
    }

    /// An empty ignore set, for callers that want to walk everything
    pub fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// The default set unioned with `additional`
    pub fn with_additional<I, S>(additional: I) -> Result<Self, CircularImportError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Self::defaults();
        for raw in additional {
            patterns.add(raw.as_ref())?;
        }
        Ok(patterns)
    }

    /// Add one pattern, keeping the set free of duplicates
    pub fn add(&mut self, raw: &str) -> Result<(), CircularImportError> {
        let raw = raw.trim();
        if raw.is_empty() || self.patterns.iter().any(|(existing, _)| existing == raw) {
            return Ok(());
        }

        let pattern = Pattern::new(raw).map_err(|source| {
            CircularImportError::InvalidIgnorePattern {
                pattern: raw.to_string(),
                source,
            }
        })?;
        self.patterns.push((raw.to_string(), pattern));
        Ok(())
    }

    /// Whether a single path component is excluded
    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns
            .iter()
            .any(|(raw, pattern)| raw == name || pattern.matches(name))
    }

    /// The raw patterns, defaults first
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(raw, _)| raw.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
