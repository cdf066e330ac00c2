use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::common::{CycleDisplayArgs, IgnoreArgs};

#[derive(Parser, Debug)]
#[command(
    name = "check-circular-import",
    about = "🔄 Detect circular imports in Python projects",
    long_about = "check-circular-import scans a Python project, extracts the imports of every \
                  module, builds the project's import graph and reports each distinct cycle. \
                  Standard library and third-party imports are ignored; only modules inside \
                  the project take part. The exit code is 0 when no cycles are found, 1 when \
                  cycles are found and 2 when the check could not run.",
    version
)]
pub struct Cli {
    /// Root directory of the Python project
    #[arg(
        value_name = "DIRECTORY",
        default_value = ".",
        env = "CHECK_CIRCULAR_IMPORT_DIRECTORY"
    )]
    pub directory: PathBuf,

    #[command(flatten)]
    pub ignore: IgnoreArgs,

    /// Emit a JSON report instead of text
    #[arg(long, env = "CHECK_CIRCULAR_IMPORT_JSON")]
    pub json: bool,

    /// Include per-file errors and per-module import detail
    #[arg(short, long, env = "CHECK_CIRCULAR_IMPORT_VERBOSE")]
    pub verbose: bool,

    #[command(flatten)]
    pub cycle_display: CycleDisplayArgs,

    /// Number of parser threads (defaults to one per CPU)
    #[arg(short, long, env = "CHECK_CIRCULAR_IMPORT_JOBS")]
    pub jobs: Option<usize>,
}

impl Cli {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
