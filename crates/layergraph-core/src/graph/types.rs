//! Graph value types: vertex ids, weights and directed edges.
//!
//! Vertices are implicit: a graph with `N` vertices owns ids `1..=N` and
//! never stores per-vertex objects.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

/// Identifier of a vertex, valid in `[1, vertex_count]`.
pub type VertexId = usize;

/// Edge weight.
///
/// Weights are only compared and printed, never summed. Blanket-implemented
/// for every ordered, printable `Copy` type, so the primitive integers and
/// floats all qualify.
pub trait Weight: Copy + PartialOrd + Debug + Display {}

impl<T> Weight for T where T: Copy + PartialOrd + Debug + Display {}

/// A weighted directed edge `src -> dest`.
///
/// An edge from A to B says nothing about B to A. Equality is structural;
/// weight-only ordering goes through [`Edge::cmp_weight`] or [`ByWeight`].
///
/// # Example
///
/// ```rust
/// use layergraph_core::graph::Edge;
///
/// let light = Edge::new(1, 2, 2u32);
/// let heavy = Edge::new(5, 6, 7u32);
/// assert!(light.lighter_than(&heavy));
/// assert_eq!(light.dest(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    src: VertexId,
    dest: VertexId,
    weight: T,
}

impl<T: Weight> Edge<T> {
    /// Creates a new edge. Bounds are checked by the graph on insertion.
    #[must_use]
    pub fn new(src: VertexId, dest: VertexId, weight: T) -> Self {
        Self { src, dest, weight }
    }

    /// Returns the source vertex.
    #[must_use]
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// Returns the destination vertex.
    #[must_use]
    pub fn dest(&self) -> VertexId {
        self.dest
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Compares two edges by weight only, ignoring endpoints.
    ///
    /// Incomparable weights (NaN) compare as `None`.
    #[must_use]
    pub fn cmp_weight(&self, other: &Self) -> Option<Ordering> {
        self.weight.partial_cmp(&other.weight)
    }

    /// `true` if this edge weighs strictly less than `other`.
    #[must_use]
    pub fn lighter_than(&self, other: &Self) -> bool {
        self.weight < other.weight
    }

    /// `true` if this edge weighs strictly more than `other`.
    #[must_use]
    pub fn heavier_than(&self, other: &Self) -> bool {
        self.weight > other.weight
    }
}

/// Orders edges by weight alone, for priority-queue consumers.
///
/// Two edges with equal weight compare equal even when their endpoints
/// differ. Incomparable weights are treated as equal.
///
/// ```rust
/// use std::collections::BinaryHeap;
/// use layergraph_core::graph::{ByWeight, Edge};
///
/// let mut heap = BinaryHeap::new();
/// heap.push(ByWeight(Edge::new(1, 2, 3u32)));
/// heap.push(ByWeight(Edge::new(2, 3, 9u32)));
/// assert_eq!(heap.pop().map(|e| e.0.weight()), Some(9));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByWeight<T>(pub Edge<T>);

impl<T: Weight> PartialEq for ByWeight<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Weight> Eq for ByWeight<T> {}

impl<T: Weight> PartialOrd for ByWeight<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Weight> Ord for ByWeight<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_weight(&other.0).unwrap_or(Ordering::Equal)
    }
}

/// A single entry of a layered traversal: a vertex and its layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraversalStep {
    /// The vertex visited at this step.
    pub vertex: VertexId,
    /// Hop distance from the start vertex.
    pub layer: usize,
}

impl TraversalStep {
    /// Creates a step for `vertex` at `layer`.
    #[must_use]
    pub fn new(vertex: VertexId, layer: usize) -> Self {
        Self { vertex, layer }
    }
}

impl From<(VertexId, usize)> for TraversalStep {
    fn from((vertex, layer): (VertexId, usize)) -> Self {
        Self { vertex, layer }
    }
}
