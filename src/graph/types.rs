//! Core graph types
//!
//! This module contains the dependency graph the cycle detector runs over.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use petgraph::graph::{DiGraph, NodeIndex};

/// A module in the import graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNode {
    pub name: String,
    pub path: PathBuf,
}

/// Directed "imports" graph restricted to in-project modules
///
/// Node indices are the registry's dense module ids, assigned in name
/// order. Each node's dependency list is kept sorted by index, which makes
/// it sorted by name as well.
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    graph: DiGraph<ModuleNode, ()>,
    dependencies: Vec<Vec<NodeIndex>>,
    importers: Vec<BTreeSet<NodeIndex>>,
    indices: HashMap<String, NodeIndex>,
}

impl ImportGraph {
    /// Assemble a graph from name-sorted modules and `(from, to)` index pairs
    ///
    /// Duplicate pairs collapse into a single edge.
    pub(crate) fn assemble(
        modules: Vec<ModuleNode>,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        let mut graph = DiGraph::with_capacity(modules.len(), 0);
        let mut indices = HashMap::with_capacity(modules.len());
        for module in modules {
            let name = module.name.clone();
            let idx = graph.add_node(module);
            indices.insert(name, idx);
        }

        let mut adjacency: Vec<BTreeSet<NodeIndex>> = vec![BTreeSet::new(); graph.node_count()];
        let mut importers: Vec<BTreeSet<NodeIndex>> = vec![BTreeSet::new(); graph.node_count()];
        for (from, to) in edges {
            let (from, to) = (NodeIndex::new(from), NodeIndex::new(to));
            if adjacency[from.index()].insert(to) {
                importers[to.index()].insert(from);
                graph.add_edge(from, to, ());
            }
        }

        let dependencies = adjacency
            .into_iter()
            .map(|targets| targets.into_iter().collect())
            .collect();

        Self {
            graph,
            dependencies,
            importers,
            indices,
        }
    }

    /// Build a graph straight from `(importer, imported)` name pairs
    ///
    /// Every name mentioned becomes a module. Mostly useful for tests and
    /// for callers that already know their edges.
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let edges: Vec<(&str, &str)> = edges.into_iter().collect();
        let names: BTreeSet<&str> = edges.iter().flat_map(|(a, b)| [*a, *b]).collect();
        let position: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(index, name)| (*name, index))
            .collect();

        let modules = names
            .iter()
            .map(|name| ModuleNode {
                name: name.to_string(),
                path: PathBuf::from(format!("{}.py", name.replace('.', "/"))),
            })
            .collect();

        Self::assemble(
            modules,
            edges
                .iter()
                .map(|(from, to)| (position[from], position[to])),
        )
    }

    /// The underlying petgraph graph
    pub fn graph(&self) -> &DiGraph<ModuleNode, ()> {
        &self.graph
    }

    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of modules importing at least one in-project module
    pub fn modules_with_dependencies(&self) -> usize {
        self.dependencies.iter().filter(|d| !d.is_empty()).count()
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    pub fn name(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].name
    }

    pub fn path(&self, idx: NodeIndex) -> &Path {
        &self.graph[idx].path
    }

    /// Modules imported by `idx`, in name order
    pub fn dependencies(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.dependencies[idx.index()]
    }

    /// Modules importing `idx`, in name order
    pub fn importers(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.importers[idx.index()].iter().copied()
    }

    pub fn importer_count(&self, idx: NodeIndex) -> usize {
        self.importers[idx.index()].len()
    }
}
