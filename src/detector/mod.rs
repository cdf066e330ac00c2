//! # Cycle Detection Module
//!
//! This module finds circular imports in the project's import graph.
//!
//! ## Algorithm
//!
//! A three-colour depth-first search (unvisited, in progress, done) driven
//! by an explicit frame stack. An edge into an in-progress module closes a
//! cycle; that cycle is the slice of the current DFS path starting at the
//! module. Finished modules are never re-entered, so the whole search is
//! O(V + E). Each cycle is rotated to start at its smallest module name and
//! duplicates are dropped.
//!
//! ## Key Components
//!
//! - **CycleDetector**: runs the search and keeps the distinct cycles
//! - **ImportCycle**: one cycle in canonical form
//! - **canonicalize_cycle**: the rotation used for deduplication
//!
//! ## Example
//!
//! ```
//! use check_circular_import::detector::CycleDetector;
//! use check_circular_import::graph::ImportGraph;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = ImportGraph::from_edges([("b", "a"), ("a", "b"), ("a", "c")]);
//!
//! let mut detector = CycleDetector::new();
//! detector.detect_cycles(&graph)?;
//!
//! assert!(detector.has_cycles());
//! assert_eq!(detector.cycle_count(), 1);
//! assert_eq!(detector.cycles()[0].modules(), ["a", "b"]);
//! # Ok(())
//! # }
//! ```

mod detector_impl;

pub use detector_impl::*;
