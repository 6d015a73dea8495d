//! In-memory directed graph and layered traversal.
//!
//! # Example
//!
//! ```rust
//! use layergraph_core::graph::{layered_bfs, Graph, TraversalStep};
//!
//! let mut graph = Graph::new(4);
//! graph.add_edge(1, 2, 10u32).unwrap();
//! graph.add_edge(1, 3, 20u32).unwrap();
//! graph.add_edge(3, 4, 30u32).unwrap();
//! assert!(graph.add_edge(4, 9, 1).is_err());
//!
//! let steps = layered_bfs(&graph, 1);
//! assert_eq!(steps.len(), 4);
//! assert_eq!(steps[3], TraversalStep::new(4, 2));
//! ```

pub mod loader;
pub mod reference;
pub mod render;
mod store;
pub mod traversal;
mod types;

#[cfg(test)]
mod store_tests;

pub use store::Graph;
pub use traversal::{
    layered_bfs, layered_bfs_with, GraphTraversal, LayerStrategy, TraversalConfig,
};
pub use types::{ByWeight, Edge, TraversalStep, VertexId, Weight};
