//! Configuration constants for check-circular-import
//!
//! This module contains the constants used throughout the application. The
//! ignore defaults and output settings can be extended through command line
//! arguments or their environment variables.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while walking the project tree; the last one
    /// is shown once the walk is done
    pub const WALK_FRAMES: &[&str] = &["◐", "◓", "◑", "◒", "✓"];
}

/// Source discovery configuration
pub mod discovery {
    /// Directory and file names skipped unless the user asks otherwise.
    /// User-supplied patterns are added to these, never replacing them.
    pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
        "venv",
        "env",
        ".venv",
        "__pycache__",
        ".git",
        "node_modules",
        ".tox",
        "build",
        "dist",
        "*.egg-info",
    ];

    /// Extension of the source files that become modules
    pub const SOURCE_EXTENSION: &str = "py";

    /// File stem marking a package's own module
    pub const PACKAGE_INIT_STEM: &str = "__init__";
}

/// Process exit codes chosen by the CLI layer
pub mod exit {
    pub const NO_CYCLES: u8 = 0;
    pub const CYCLES_FOUND: u8 = 1;
    pub const EXECUTION_ERROR: u8 = 2;
}
