//! Check command configuration

use std::path::PathBuf;

use super::IgnorePatterns;
use crate::cli::OutputFormat;
use crate::error::CircularImportError;

/// Configuration for a circular import check
///
/// This struct contains all options for discovering, analysing and
/// reporting import cycles in one Python project.
#[derive(Debug, Clone)]
pub struct CheckImportsConfig {
    /// Project root to scan
    pub root: PathBuf,
    /// Names and globs excluded from discovery
    pub ignore: IgnorePatterns,
    /// Output format for the report
    pub format: OutputFormat,
    /// Include per-file errors and per-module edge detail
    pub verbose: bool,
    /// Maximum number of cycles to print in the human report (None = all)
    pub max_cycles: Option<usize>,
    /// Size of the parser worker pool (None = one per core)
    pub jobs: Option<usize>,
}

impl CheckImportsConfig {
    pub fn builder() -> CheckImportsConfigBuilder {
        CheckImportsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckImportsConfigBuilder {
    root: Option<PathBuf>,
    ignore: Option<IgnorePatterns>,
    format: Option<OutputFormat>,
    verbose: Option<bool>,
    max_cycles: Option<Option<usize>>,
    jobs: Option<Option<usize>>,
}

impl CheckImportsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_ignore(mut self, ignore: IgnorePatterns) -> Self {
        self.ignore = Some(ignore);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = Some(jobs);
        self
    }
}

impl crate::common::ConfigBuilder for CheckImportsConfigBuilder {
    type Config = CheckImportsConfig;

    fn build(self) -> Result<Self::Config, CircularImportError> {
        let jobs = self.jobs.unwrap_or(None);
        if jobs == Some(0) {
            return Err(CircularImportError::ConfigurationError {
                message: "--jobs must be at least 1".to_string(),
            });
        }

        Ok(CheckImportsConfig {
            root: self
                .root
                .ok_or_else(|| CircularImportError::ConfigurationError {
                    message: "Missing required field: root".to_string(),
                })?,
            ignore: self.ignore.unwrap_or_default(),
            format: self.format.unwrap_or(OutputFormat::Human),
            verbose: self.verbose.unwrap_or(false),
            max_cycles: self.max_cycles.unwrap_or(None),
            jobs,
        })
    }
}
