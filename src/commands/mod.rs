//! Command implementations for the check-circular-import CLI
//!
//! The tool has a single command: check a project for circular imports.
//! It turns the parsed CLI into a `CheckImportsConfig`, runs the executor
//! and hands the resulting summary back to the caller.

pub mod check;

use miette::Result;

use crate::cli::Cli;
use crate::reports::AnalysisSummary;

/// Execute the command described by the CLI input
pub fn execute_command(cli: Cli) -> Result<AnalysisSummary> {
    check::execute_check_command(cli)
}
