//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{AnalysisSummary, ReportGenerator};
use crate::error::CircularImportError;
use crate::utils::string::plural;

const RULE_WIDTH: usize = 60;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
    verbose: bool,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>, verbose: bool) -> Self {
        Self {
            max_cycles,
            verbose,
        }
    }

    fn write_cycles(
        &self,
        output: &mut String,
        summary: &AnalysisSummary,
    ) -> Result<(), CircularImportError> {
        let total_cycles = summary.cycles.len();
        writeln!(
            output,
            "\n{}  Found {} circular {}:\n",
            style("⚠️").yellow().bold(),
            style(total_cycles).red().bold(),
            plural("import", total_cycles)
        )?;

        let limit = self.max_cycles.unwrap_or(total_cycles);
        for (i, cycle) in summary.cycles.iter().take(limit).enumerate() {
            writeln!(output, "{}", style(format!("Cycle {}:", i + 1)).bold())?;
            for (position, module) in cycle.iter().enumerate() {
                if position > 0 {
                    writeln!(output, "    {} imports", style("↓").dim())?;
                }
                writeln!(output, "  {}", style(module).yellow())?;
            }
            if let Some(first) = cycle.first() {
                writeln!(output, "    {} imports", style("↓").dim())?;
                writeln!(
                    output,
                    "  {} {}",
                    style(first).yellow(),
                    style("(cycle completes)").dim()
                )?;
            }
            writeln!(output)?;
        }

        if limit < total_cycles {
            writeln!(
                output,
                "{} Showing {} of {} cycles. Use --max-cycles to see more.\n",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(total_cycles).yellow()
            )?;
        }

        Ok(())
    }

    fn write_details(
        &self,
        output: &mut String,
        summary: &AnalysisSummary,
    ) -> Result<(), CircularImportError> {
        if !summary.parse_errors.is_empty() {
            writeln!(output, "\n{} Parse errors:", style("✗").red())?;
            for error in &summary.parse_errors {
                writeln!(
                    output,
                    "  {} {}: {}",
                    style("•").dim(),
                    style(error.path.display()).bold(),
                    error.message
                )?;
            }
        }

        if !summary.discovery_errors.is_empty() {
            writeln!(output, "\n{} Discovery errors:", style("✗").red())?;
            for error in &summary.discovery_errors {
                let location = error
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                writeln!(
                    output,
                    "  {} {}: {}",
                    style("•").dim(),
                    style(location).bold(),
                    error.message
                )?;
            }
        }

        if !summary.resolution_warnings.is_empty() {
            writeln!(output, "\n{} Unresolved relative imports:", style("⚠").yellow())?;
            for warning in &summary.resolution_warnings {
                writeln!(
                    output,
                    "  {} {}: `{}` ({})",
                    style("•").dim(),
                    style(&warning.module).bold(),
                    warning.statement,
                    warning.message
                )?;
            }
        }

        let connected: Vec<_> = summary
            .modules
            .iter()
            .filter(|m| !m.dependencies.is_empty() || !m.imported_by.is_empty())
            .collect();
        if !connected.is_empty() {
            writeln!(output, "\n{} Module dependencies:", style("📦").blue())?;
            for module in connected {
                writeln!(output, "  {}", style(&module.name).bold())?;
                if !module.dependencies.is_empty() {
                    writeln!(
                        output,
                        "    {} imports: {}",
                        style("→").dim(),
                        module.dependencies.join(", ")
                    )?;
                }
                if !module.imported_by.is_empty() {
                    writeln!(
                        output,
                        "    {} imported by: {}",
                        style("←").dim(),
                        module.imported_by.join(", ")
                    )?;
                }
            }
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, summary: &AnalysisSummary) -> Result<String, CircularImportError> {
        let mut output = String::new();
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(output, "\n{rule}")?;
        writeln!(output, "{}", style("CIRCULAR IMPORT DETECTION REPORT").bold())?;
        writeln!(output, "{rule}")?;

        writeln!(output, "\nProject root: {}", style(summary.root.display()).cyan())?;
        writeln!(output, "\nStatistics:")?;
        writeln!(output, "  - Total modules analyzed: {}", summary.stats.modules)?;
        writeln!(output, "  - Total dependencies: {}", summary.stats.dependencies)?;
        writeln!(
            output,
            "  - Modules with dependencies: {}",
            summary.stats.modules_with_dependencies
        )?;
        writeln!(
            output,
            "  - Circular dependencies found: {}",
            summary.stats.cycles_found
        )?;
        if !summary.parse_errors.is_empty() {
            writeln!(
                output,
                "  - Files that could not be parsed: {}",
                summary.parse_errors.len()
            )?;
        }

        if summary.has_cycles() {
            self.write_cycles(&mut output, summary)?;
        } else {
            writeln!(
                output,
                "\n{} No circular imports detected!",
                style("✅").green().bold()
            )?;
        }

        if self.verbose {
            self.write_details(&mut output, summary)?;
        }

        writeln!(output, "{rule}")?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use console::strip_ansi_codes;

    use super::*;
    use crate::core::ParseError;
    use crate::reports::{AnalysisStats, ModuleDetail};

    fn summary_with_cycles(cycles: &[&[&str]]) -> AnalysisSummary {
        AnalysisSummary {
            root: PathBuf::from("/project"),
            stats: AnalysisStats {
                modules: 3,
                dependencies: 3,
                modules_with_dependencies: 3,
                cycles_found: cycles.len(),
            },
            cycles: cycles
                .iter()
                .map(|c| c.iter().map(|m| m.to_string()).collect())
                .collect(),
            ..Default::default()
        }
    }

    fn render(generator: &HumanReportGenerator, summary: &AnalysisSummary) -> String {
        strip_ansi_codes(&generator.generate_report(summary).unwrap()).to_string()
    }

    #[test]
    fn test_report_without_cycles() {
        let report = render(&HumanReportGenerator::new(None, false), &summary_with_cycles(&[]));

        assert!(report.contains("CIRCULAR IMPORT DETECTION REPORT"));
        assert!(report.contains("Project root: /project"));
        assert!(report.contains("Circular dependencies found: 0"));
        assert!(report.contains("No circular imports detected!"));
        assert!(!report.contains("Cycle 1:"));
    }

    #[test]
    fn test_cycle_chain_closes_on_first_module() {
        let report = render(
            &HumanReportGenerator::new(None, false),
            &summary_with_cycles(&[&["x", "y", "z"]]),
        );

        assert!(report.contains("Found 1 circular import:"));
        assert!(report.contains(
            "Cycle 1:\n  x\n    ↓ imports\n  y\n    ↓ imports\n  z\n    ↓ imports\n  x (cycle \
             completes)\n"
        ));
    }

    #[test]
    fn test_max_cycles_limits_output() {
        let summary = summary_with_cycles(&[&["a", "b"], &["c", "d"], &["e", "f"]]);
        let report = render(&HumanReportGenerator::new(Some(2), false), &summary);

        assert!(report.contains("Found 3 circular imports:"));
        assert!(report.contains("Cycle 2:"));
        assert!(!report.contains("Cycle 3:"));
        assert!(report.contains("Showing 2 of 3 cycles"));
    }

    #[test]
    fn test_verbose_lists_errors_and_edges() {
        let mut summary = summary_with_cycles(&[]);
        summary.parse_errors.push(ParseError {
            path: PathBuf::from("/project/bad.py"),
            module: "bad".to_string(),
            message: "invalid syntax at line 2, column 5".to_string(),
        });
        summary.modules.push(ModuleDetail {
            name: "app".to_string(),
            path: PathBuf::from("/project/app.py"),
            dependencies: vec!["core".to_string()],
            imported_by: vec![],
        });

        let quiet = render(&HumanReportGenerator::new(None, false), &summary);
        assert!(quiet.contains("Files that could not be parsed: 1"));
        assert!(!quiet.contains("Parse errors:"));

        let verbose = render(&HumanReportGenerator::new(None, true), &summary);
        assert!(verbose.contains("Parse errors:"));
        assert!(verbose.contains("/project/bad.py: invalid syntax at line 2, column 5"));
        assert!(verbose.contains("→ imports: core"));
    }
}
