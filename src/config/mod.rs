//! # Configuration Module
//!
//! Configuration values for a check run, constructed once from the CLI and
//! threaded explicitly through the analysis stages.
//!
//! - **CheckImportsConfig**: everything the check command needs, built with
//!   a `with_*` builder
//! - **IgnorePatterns**: the default ignore set unioned with user patterns
//!
//! ## Example
//!
//! ```
//! use check_circular_import::cli::OutputFormat;
//! use check_circular_import::common::ConfigBuilder;
//! use check_circular_import::config::{CheckImportsConfig, IgnorePatterns};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CheckImportsConfig::builder()
//!     .with_root(".")
//!     .with_ignore(IgnorePatterns::with_additional(["tests", "docs"])?)
//!     .with_format(OutputFormat::Json)
//!     .build()?;
//!
//! assert!(config.ignore.is_ignored("docs"));
//! # Ok(())
//! # }
//! ```

pub mod check;
pub mod ignore;

pub use check::{CheckImportsConfig, CheckImportsConfigBuilder};
pub use ignore::IgnorePatterns;
