//! # Import Analysis Module
//!
//! This module turns a directory of Python sources into per-module import
//! sets. It owns the module registry, the tree-sitter based import extractor
//! and the resolver for relative imports.
//!
//! ## Key Components
//!
//! - **ImportAnalyzer**: walks the project, registers modules and extracts
//!   their imports on a worker pool
//! - **ModuleRegistry**: dotted module names ⇄ dense `ModuleId`s
//! - **ImportExtractor**: parses one file into `ImportStatement`s and
//!   resolves them to candidate module names
//! - **resolve_relative**: pure resolution of `from ..x import y`
//!
//! ## Example
//!
//! ```
//! use check_circular_import::analyzer::{resolve_relative, ImportExtractor, SourceModule};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(resolve_relative("app.views", false, 1, Some("models"))?, "app.models");
//!
//! let mut extractor = ImportExtractor::new()?;
//! let module = SourceModule::new("app.views", "app/views.py", false);
//! let imports = extractor.extract("from .models import User\n", &module)?;
//! assert!(imports.targets.contains("app.models"));
//! # Ok(())
//! # }
//! ```

mod analyzer_impl;
mod extractor;
mod registry;
mod resolver;

pub use analyzer_impl::ImportAnalyzer;
pub use extractor::{ExtractedImports, ImportExtractor, SyntaxError};
pub use registry::{ModuleId, ModuleRegistry, SourceModule, module_name_for};
pub use resolver::{ResolutionError, candidate_targets, resolve_relative};
