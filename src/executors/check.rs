//! Check command executor

use console::style;
use miette::{Result, WrapErr};

use crate::analyzer::ImportAnalyzer;
use crate::cli::OutputFormat;
use crate::config::CheckImportsConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::ImportGraphBuilder;
use crate::progress::ProgressReporter;
use crate::reports::{AnalysisSummary, HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct CheckExecutor;

impl CheckExecutor {
    fn print_settings(config: &CheckImportsConfig, analyzer: &ImportAnalyzer) {
        eprintln!(
            "  {} Project root: {}",
            style("→").dim(),
            style(analyzer.root().display()).cyan()
        );
        let patterns: Vec<&str> = config.ignore.patterns().collect();
        eprintln!(
            "  {} Ignoring: {}",
            style("→").dim(),
            style(patterns.join(", ")).dim()
        );
        eprintln!(
            "  {} Parsed {} of {} modules",
            style("→").dim(),
            style(analyzer.parsed_count()).yellow(),
            style(analyzer.registry().len()).yellow()
        );
    }
}

impl CommandExecutor for CheckExecutor {
    type Config = CheckImportsConfig;
    type Output = AnalysisSummary;

    fn execute(config: Self::Config) -> Result<Self::Output> {
        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        if progress.is_some() || config.verbose {
            eprintln!(
                "{} Checking {} for circular imports...\n",
                style("🔄").cyan(),
                style(config.root.display()).bold()
            );
        }

        let mut analyzer = ImportAnalyzer::new();
        analyzer
            .analyze_project(&config.root, &config.ignore, config.jobs, progress.as_mut())
            .wrap_err("Failed to analyze the project")?;

        if config.verbose {
            Self::print_settings(&config, &analyzer);
        }

        let mut graph_builder = ImportGraphBuilder::new();
        graph_builder
            .build_from_analysis(&analyzer)
            .wrap_err("Failed to build the import graph")?;

        if let Some(p) = progress.as_mut() {
            p.start_cycle_detection();
        }

        let mut detector = CycleDetector::new();
        detector
            .detect_cycles(graph_builder.graph())
            .wrap_err("Failed to detect import cycles")?;

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(detector.cycle_count());
        }

        let summary = AnalysisSummary::new(&analyzer, graph_builder.graph(), &detector);

        let report = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_cycles, config.verbose)
                    .generate_report(&summary)
            }
            OutputFormat::Json => JsonReportGenerator::new(config.verbose).generate_report(&summary),
        }
        .wrap_err("Failed to generate report")?;

        print!("{report}");
        if config.format == OutputFormat::Json {
            println!();
        }

        Ok(summary)
    }
}
