use std::collections::HashSet;

use miette::Result;
use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::graph::ImportGraph;

/// Rotate a cycle to start at its lexicographically smallest module
///
/// Direction is preserved. A trailing repeat of the first module (the
/// closed form `[a, b, a]`) is dropped first, so both open and closed
/// inputs give the same result, and applying it twice changes nothing.
pub fn canonicalize_cycle<S: AsRef<str>>(cycle: &[S]) -> Vec<String> {
    let mut modules: Vec<&str> = cycle.iter().map(AsRef::as_ref).collect();
    if modules.len() > 1 && modules.first() == modules.last() {
        modules.pop();
    }

    let start = modules
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.cmp(b))
        .map(|(i, _)| i)
        .unwrap_or(0);
    modules.rotate_left(start);

    modules.into_iter().map(str::to_string).collect()
}

/// One elementary import cycle in canonical form
///
/// The last module imports the first; the closing module is not repeated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImportCycle {
    modules: Vec<String>,
}

impl ImportCycle {
    pub fn new<S: AsRef<str>>(modules: &[S]) -> Self {
        Self {
            modules: canonicalize_cycle(modules),
        }
    }

    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn contains(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }

    /// A module importing itself
    pub fn is_self_import(&self) -> bool {
        self.modules.len() == 1
    }

    /// The import edges around the cycle, including the closing one
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let n = self.modules.len();
        (0..n).map(move |i| (self.modules[i].as_str(), self.modules[(i + 1) % n].as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// DFS frame: the module and the next dependency to look at
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeIndex,
    next_edge: usize,
}

/// Detector for finding import cycles in a project graph
///
/// Runs a three-colour depth-first search with an explicit frame stack, so
/// deep import chains cannot overflow the call stack. The frame stack is the
/// current DFS path; meeting a module that is still in progress closes a
/// cycle made of the path slice from that module to the top. Finished
/// modules are never re-entered, which keeps the search linear in modules
/// plus edges.
pub struct CycleDetector {
    cycles: Vec<ImportCycle>,
    seen: HashSet<ImportCycle>,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleDetector {
    /// Create a new cycle detector
    pub fn new() -> Self {
        Self {
            cycles: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Detect all cycles in the import graph
    ///
    /// Roots are tried in module name order and dependencies are followed in
    /// name order, so the same graph always yields the same cycles in the
    /// same order.
    pub fn detect_cycles(&mut self, graph: &ImportGraph) -> Result<()> {
        let count = graph.module_count();
        let mut state = vec![VisitState::Unvisited; count];
        let mut position: Vec<Option<usize>> = vec![None; count];
        let mut path: Vec<Frame> = Vec::new();

        for root in graph.node_indices() {
            if state[root.index()] != VisitState::Unvisited {
                continue;
            }

            state[root.index()] = VisitState::InProgress;
            position[root.index()] = Some(0);
            path.push(Frame {
                node: root,
                next_edge: 0,
            });

            loop {
                let Some(frame) = path.last_mut() else {
                    break;
                };
                let node = frame.node;

                let Some(&next) = graph.dependencies(node).get(frame.next_edge) else {
                    state[node.index()] = VisitState::Done;
                    position[node.index()] = None;
                    path.pop();
                    continue;
                };
                frame.next_edge += 1;

                match state[next.index()] {
                    VisitState::Unvisited => {
                        state[next.index()] = VisitState::InProgress;
                        position[next.index()] = Some(path.len());
                        path.push(Frame {
                            node: next,
                            next_edge: 0,
                        });
                    }
                    VisitState::InProgress => {
                        if let Some(start) = position[next.index()] {
                            let members: Vec<&str> =
                                path[start..].iter().map(|f| graph.name(f.node)).collect();
                            self.add_cycle(ImportCycle::new(&members));
                        }
                    }
                    VisitState::Done => {}
                }
            }
        }

        Ok(())
    }

    /// Get all detected cycles, in discovery order
    pub fn cycles(&self) -> &[ImportCycle] {
        &self.cycles
    }

    /// Check if any cycles were detected
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Get the number of detected cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Add a cycle unless an equal canonical cycle is already present
    pub fn add_cycle(&mut self, cycle: ImportCycle) {
        if self.seen.insert(cycle.clone()) {
            self.cycles.push(cycle);
        }
    }
}
