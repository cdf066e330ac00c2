use miette::Result;

use super::types::{ImportGraph, ModuleNode};
use crate::analyzer::ImportAnalyzer;

/// Builder for the project's import graph
///
/// Folds every module's extracted import targets into one graph, keeping a
/// target only when it names a discovered module that parsed successfully.
/// Standard library, third-party and unresolved names are dropped here.
#[derive(Debug, Default)]
pub struct ImportGraphBuilder {
    graph: ImportGraph,
    dropped_targets: usize,
}

impl ImportGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from a completed analysis
    pub fn build_from_analysis(&mut self, analyzer: &ImportAnalyzer) -> Result<()> {
        let registry = analyzer.registry();

        let modules = registry
            .iter()
            .map(|(_, module)| ModuleNode {
                name: module.name().to_string(),
                path: module.path().to_path_buf(),
            })
            .collect();

        let mut edges = Vec::new();
        let mut dropped = 0;
        for (from, _) in registry.iter() {
            let Some(imports) = analyzer.imports_of(from) else {
                continue;
            };

            for target in &imports.targets {
                match registry.id_of(target) {
                    Some(to) if analyzer.is_parsed(to) => edges.push((from.index(), to.index())),
                    _ => dropped += 1,
                }
            }
        }

        self.graph = ImportGraph::assemble(modules, edges);
        self.dropped_targets = dropped;

        Ok(())
    }

    pub fn graph(&self) -> &ImportGraph {
        &self.graph
    }

    /// Candidate targets that were not in-project modules
    pub fn dropped_targets(&self) -> usize {
        self.dropped_targets
    }
}
