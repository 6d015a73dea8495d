//! Fixed-size directed graph with an insertion-ordered edge list.
//!
//! The vertex count is set once at construction. Edges are appended and
//! never removed; after construction the graph is only read.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

use super::types::{Edge, VertexId, Weight};

/// Directed, edge-weighted graph over vertices `1..=vertex_count`.
///
/// Every stored edge has both endpoints in range. Parallel edges between
/// the same pair are kept as separate entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<T> {
    /// Number of vertices, fixed at construction.
    vertex_count: usize,
    /// All edges in insertion order.
    edges: Vec<Edge<T>>,
}

impl<T: Weight> Graph<T> {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// A count of zero is accepted and yields a graph that rejects every
    /// edge; use [`Graph::try_new`] to refuse it up front.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Creates a graph with pre-allocated edge capacity.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, expected_edges: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::with_capacity(expected_edges),
        }
    }

    /// Creates a graph, rejecting an empty vertex set.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidVertexCount` if `vertex_count` is zero.
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidVertexCount(vertex_count));
        }
        Ok(Self::new(vertex_count))
    }

    /// Builds a graph from `(src, dest, weight)` triples.
    ///
    /// Out-of-range triples are dropped with a warning, as in [`Graph::add_edge`].
    #[must_use]
    pub fn from_edge_list<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, T)>,
    {
        let mut graph = Self::new(vertex_count);
        graph.add_edges(edges);
        graph
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the vertex id range `1..=vertex_count`.
    #[must_use]
    pub fn vertices(&self) -> RangeInclusive<VertexId> {
        1..=self.vertex_count
    }

    /// Returns true if `v` is a vertex of this graph.
    #[must_use]
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        (1..=self.vertex_count).contains(&v)
    }

    /// Appends the edge `src -> dest`.
    ///
    /// An edge with an endpoint outside `[1, vertex_count]` is not stored.
    /// The rejection is logged and returned; the graph is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfBounds` if either endpoint is out of range.
    pub fn add_edge(&mut self, src: VertexId, dest: VertexId, weight: T) -> Result<()> {
        self.insert(Edge::new(src, dest, weight))
    }

    /// Appends an already-built edge, with the same checks as [`Graph::add_edge`].
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexOutOfBounds` if either endpoint is out of range.
    pub fn insert(&mut self, edge: Edge<T>) -> Result<()> {
        if !self.contains_vertex(edge.src()) || !self.contains_vertex(edge.dest()) {
            tracing::warn!(
                src = edge.src(),
                dest = edge.dest(),
                vertex_count = self.vertex_count,
                "Vertex out of bounds, edge dropped"
            );
            return Err(Error::VertexOutOfBounds {
                src: edge.src(),
                dest: edge.dest(),
                vertex_count: self.vertex_count,
            });
        }
        self.edges.push(edge);
        Ok(())
    }

    /// Appends every triple, returning how many were accepted.
    pub fn add_edges<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = (VertexId, VertexId, T)>,
    {
        edges
            .into_iter()
            .filter(|&(src, dest, weight)| self.add_edge(src, dest, weight).is_ok())
            .count()
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// Returns every edge leaving `v`, in insertion order.
    ///
    /// `v` is not validated: an id outside the graph simply has no edges.
    #[must_use]
    pub fn outgoing_edges(&self, v: VertexId) -> Vec<Edge<T>> {
        self.outgoing_iter(v).copied().collect()
    }

    /// Borrowing variant of [`Graph::outgoing_edges`].
    pub fn outgoing_iter(&self, v: VertexId) -> impl Iterator<Item = &Edge<T>> + '_ {
        self.edges.iter().filter(move |e| e.src() == v)
    }
}
