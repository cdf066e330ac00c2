//! # Check Circular Import - Find Import Cycles in Python Projects
//!
//! Check Circular Import walks a Python project, extracts the imports of
//! every module, builds the project's import graph and reports each distinct
//! cycle. It is meant to run as a pre-commit hook or in CI: the process exits
//! with 0 when the project is clean, 1 when cycles were found and 2 when the
//! check itself could not run.
//!
//! ## Main Components
//!
//! - **Analyzer**: discovers modules and extracts their imports with
//!   tree-sitter, in parallel
//! - **Graph**: keeps only imports between the project's own modules
//! - **Detector**: three-colour DFS that finds and canonicalises cycles
//! - **Reports**: statistics plus human-readable and JSON output
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use check_circular_import::analyzer::ImportAnalyzer;
//! use check_circular_import::config::IgnorePatterns;
//! use check_circular_import::detector::CycleDetector;
//! use check_circular_import::graph::ImportGraphBuilder;
//! use check_circular_import::reports::{AnalysisSummary, HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! // Step 1: Discover the modules and extract their imports
//! let ignore = IgnorePatterns::with_additional(["tests"])?;
//! let mut analyzer = ImportAnalyzer::new();
//! analyzer.analyze_project(Path::new("/path/to/project"), &ignore, None, None)?;
//!
//! // Step 2: Build the in-project import graph
//! let mut graph_builder = ImportGraphBuilder::new();
//! graph_builder.build_from_analysis(&analyzer)?;
//!
//! // Step 3: Detect circular imports
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(graph_builder.graph())?;
//!
//! for cycle in detector.cycles() {
//!     println!("{}", cycle.modules().join(" -> "));
//! }
//!
//! // Step 4: Render a report
//! let summary = AnalysisSummary::new(&analyzer, graph_builder.graph(), &detector);
//! println!("{}", HumanReportGenerator::new(Some(5), false).generate_report(&summary)?);
//! # Ok(())
//! # }
//! ```

use std::process::ExitCode;

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod discovery;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;

use crate::constants::exit;
use crate::reports::AnalysisSummary;

/// Exit status for a finished analysis
pub fn exit_status(summary: &AnalysisSummary) -> u8 {
    if summary.has_cycles() {
        exit::CYCLES_FOUND
    } else {
        exit::NO_CYCLES
    }
}

/// Parse the command line and run the check
pub fn try_run() -> miette::Result<ExitCode> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    let summary = execute_command(cli)?;

    Ok(ExitCode::from(exit_status(&summary)))
}

// Main entry point for the library
pub fn run() -> ExitCode {
    match try_run() {
        Ok(code) => code,
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::from(exit::EXECUTION_ERROR)
        }
    }
}
