//! Core type definitions
//!
//! This module contains the basic data structures shared by the analysis
//! stages, with minimal logic - focusing on data representation.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// One import statement as produced by the parsing stage
///
/// This is the only view of a source file that the later stages see; the
/// syntax tree never leaves the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportStatement {
    /// `import a.b` (one per imported name, `names` empty) or
    /// `from a.b import c, d`, where a wildcard is the single name `*`
    Absolute { module: String, names: Vec<String> },
    /// `from ..pkg import c` or `from . import c`
    Relative {
        level: usize,
        suffix: Option<String>,
        names: Vec<String>,
    },
}

impl ImportStatement {
    /// The name recorded for `from x import *`
    pub const WILDCARD: &'static str = "*";

    pub fn absolute(module: impl Into<String>) -> Self {
        Self::Absolute {
            module: module.into(),
            names: Vec::new(),
        }
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute { module, names } if names.is_empty() => write!(f, "import {module}"),
            Self::Absolute { module, names } => {
                write!(f, "from {module} import {}", names.join(", "))
            }
            Self::Relative {
                level,
                suffix,
                names,
            } => write!(
                f,
                "from {}{} import {}",
                ".".repeat(*level),
                suffix.as_deref().unwrap_or(""),
                names.join(", ")
            ),
        }
    }
}

/// A directory or file that could not be walked or registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryError {
    pub path: Option<PathBuf>,
    pub message: String,
}

/// A source file whose syntax could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub path: PathBuf,
    pub module: String,
    pub message: String,
}

/// A relative import that climbs above the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionWarning {
    pub module: String,
    pub statement: String,
    pub message: String,
}
