//! # `layergraph` Core
//!
//! Directed, edge-weighted graph container with a breadth-first traversal
//! that tags every visited vertex with its layer (hop distance from the
//! start vertex).
//!
//! ## Quick Start
//!
//! ```rust
//! use layergraph_core::graph::{layered_bfs, reference::reference_graph, render};
//!
//! let graph = reference_graph::<u32>();
//! let steps = layered_bfs(&graph, 1);
//!
//! let order: Vec<usize> = steps.iter().map(|s| s.vertex).collect();
//! assert_eq!(order, vec![1, 2, 5, 4, 8, 3, 6, 7]);
//! print!("{}", render::render_adjacency(&graph));
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod config;
pub mod error;
pub mod graph;

pub use config::{LayerGraphConfig, LoggingConfig, TraversalSettings};
pub use error::{Error, Result};
pub use graph::{
    layered_bfs, layered_bfs_with, ByWeight, Edge, Graph, GraphTraversal, LayerStrategy,
    TraversalConfig, TraversalStep, VertexId, Weight,
};
