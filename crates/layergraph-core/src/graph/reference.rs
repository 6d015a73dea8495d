//! The fixed 8-vertex reference graph used by tests, benches and the CLI.

use super::store::Graph;
use super::types::{VertexId, Weight};

/// Vertex count of the reference graph.
pub const REFERENCE_VERTEX_COUNT: usize = 8;

/// `(src, dest, weight)` triples of the reference graph, in insertion order.
pub const REFERENCE_EDGES: [(VertexId, VertexId, u8); 24] = [
    (1, 2, 2),
    (1, 5, 3),
    (2, 1, 2),
    (2, 5, 5),
    (2, 4, 1),
    (3, 4, 2),
    (3, 7, 3),
    (4, 2, 1),
    (4, 3, 2),
    (4, 5, 2),
    (4, 6, 4),
    (4, 8, 5),
    (5, 1, 3),
    (5, 2, 5),
    (5, 4, 2),
    (5, 8, 3),
    (6, 4, 4),
    (6, 7, 4),
    (6, 8, 1),
    (7, 3, 3),
    (7, 6, 4),
    (8, 4, 5),
    (8, 5, 3),
    (8, 6, 1),
];

/// Builds the reference graph with weights converted into `T`.
#[must_use]
pub fn reference_graph<T: Weight + From<u8>>() -> Graph<T> {
    let mut graph = Graph::with_capacity(REFERENCE_VERTEX_COUNT, REFERENCE_EDGES.len());
    graph.add_edges(
        REFERENCE_EDGES
            .iter()
            .map(|&(src, dest, weight)| (src, dest, T::from(weight))),
    );
    graph
}
