//! The result object handed to report generators and the CLI layer

use std::path::PathBuf;

use serde::Serialize;

use crate::analyzer::ImportAnalyzer;
use crate::core::{DiscoveryError, ParseError, ResolutionWarning};
use crate::detector::CycleDetector;
use crate::graph::ImportGraph;

/// Aggregate counts for one analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    /// Discovered modules, including files that failed to parse
    pub modules: usize,
    /// Distinct in-project import edges
    pub dependencies: usize,
    /// Modules with at least one in-project import
    pub modules_with_dependencies: usize,
    pub cycles_found: usize,
}

/// Per-module edge detail shown in verbose output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDetail {
    pub name: String,
    pub path: PathBuf,
    pub dependencies: Vec<String>,
    pub imported_by: Vec<String>,
}

/// Everything a caller needs to render a report or pick an exit code
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisSummary {
    pub root: PathBuf,
    pub stats: AnalysisStats,
    /// Canonical cycles in detection order; the first module closes each one
    pub cycles: Vec<Vec<String>>,
    pub parse_errors: Vec<ParseError>,
    pub discovery_errors: Vec<DiscoveryError>,
    pub resolution_warnings: Vec<ResolutionWarning>,
    pub modules: Vec<ModuleDetail>,
}

impl AnalysisSummary {
    pub fn new(analyzer: &ImportAnalyzer, graph: &ImportGraph, detector: &CycleDetector) -> Self {
        let stats = AnalysisStats {
            modules: graph.module_count(),
            dependencies: graph.edge_count(),
            modules_with_dependencies: graph.modules_with_dependencies(),
            cycles_found: detector.cycle_count(),
        };

        let modules = graph
            .node_indices()
            .map(|idx| ModuleDetail {
                name: graph.name(idx).to_string(),
                path: graph.path(idx).to_path_buf(),
                dependencies: graph
                    .dependencies(idx)
                    .iter()
                    .map(|dep| graph.name(*dep).to_string())
                    .collect(),
                imported_by: graph
                    .importers(idx)
                    .map(|importer| graph.name(importer).to_string())
                    .collect(),
            })
            .collect();

        Self {
            root: analyzer.root().to_path_buf(),
            stats,
            cycles: detector
                .cycles()
                .iter()
                .map(|cycle| cycle.modules().to_vec())
                .collect(),
            parse_errors: analyzer.parse_errors().to_vec(),
            discovery_errors: analyzer.discovery_errors().to_vec(),
            resolution_warnings: analyzer.resolution_warnings().to_vec(),
            modules,
        }
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Number of per-file problems of any kind
    pub fn error_count(&self) -> usize {
        self.parse_errors.len() + self.discovery_errors.len()
    }

    /// Modules with no in-project imports in either direction
    pub fn isolated_modules(&self) -> impl Iterator<Item = &ModuleDetail> {
        self.modules
            .iter()
            .filter(|m| m.dependencies.is_empty() && m.imported_by.is_empty())
    }
}
