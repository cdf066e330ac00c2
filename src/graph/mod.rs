//! # Import Graph Module
//!
//! This module folds the per-module import sets into a single directed
//! graph over the project's own modules.
//!
//! ## Components
//!
//! - **ImportGraphBuilder**: builds the graph from an `ImportAnalyzer`,
//!   dropping every target that is not a successfully parsed project module
//! - **ImportGraph**: petgraph `DiGraph` indexed by module id, with sorted
//!   dependency lists and a reverse "imported by" index
//!
//! ## Example
//!
//! ```
//! use check_circular_import::graph::ImportGraph;
//!
//! let graph = ImportGraph::from_edges([("app", "models"), ("models", "db"), ("app", "db")]);
//!
//! assert_eq!(graph.module_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//!
//! let db = graph.index_of("db").unwrap();
//! let importers: Vec<&str> = graph.importers(db).map(|idx| graph.name(idx)).collect();
//! assert_eq!(importers, vec!["app", "models"]);
//! ```

mod builder;
mod types;

pub use builder::ImportGraphBuilder;
pub use types::{ImportGraph, ModuleNode};
