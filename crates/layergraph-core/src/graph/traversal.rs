//! Layered breadth-first traversal.
//!
//! Provides generic traversal via the [`GraphTraversal`] trait: any graph
//! that can list the targets of a vertex's outgoing edges gets layered BFS
//! without reimplementation.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::store::Graph;
use super::types::{TraversalStep, VertexId, Weight};

/// Trait for graph traversal — any graph store can implement this.
pub trait GraphTraversal {
    /// Returns the destinations of the edges leaving `v`, in insertion order.
    ///
    /// Unknown vertices have no outgoing edges.
    fn outgoing_targets(&self, v: VertexId) -> Vec<VertexId>;
}

impl<T: Weight> GraphTraversal for Graph<T> {
    fn outgoing_targets(&self, v: VertexId) -> Vec<VertexId> {
        self.outgoing_iter(v).map(|e| e.dest()).collect()
    }
}

/// How layer numbers are assigned during traversal.
///
/// Both strategies visit vertices in the same order; they differ only in
/// the layer reported when stale queue entries sit on a layer boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerStrategy {
    /// Each queued entry carries its own layer. Layers are exact hop counts.
    #[default]
    DistanceCarrying,
    /// Layers advance when a counter of the current frontier runs out,
    /// re-armed from the queue length. Reproduces legacy reference output.
    FrontierCounting,
}

/// Configuration for layered traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Layer assignment strategy.
    pub strategy: LayerStrategy,
    /// Vertices at this layer are reported but not expanded (`None` = unbounded).
    pub max_layer: Option<usize>,
    /// Maximum number of results (`None` = unbounded).
    pub limit: Option<usize>,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            strategy: LayerStrategy::DistanceCarrying,
            max_layer: None,
            limit: None,
        }
    }
}

impl TraversalConfig {
    /// Creates an unbounded config using `strategy`.
    #[must_use]
    pub fn new(strategy: LayerStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Stops expanding past `max_layer` (builder pattern).
    #[must_use]
    pub fn with_max_layer(mut self, max_layer: usize) -> Self {
        self.max_layer = Some(max_layer);
        self
    }

    /// Caps the number of results (builder pattern).
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn expands(&self, layer: usize) -> bool {
        self.max_layer.map_or(true, |max| layer < max)
    }

    fn is_full(&self, len: usize) -> bool {
        self.limit.is_some_and(|limit| len >= limit)
    }
}

/// Layered BFS from `start` with default settings.
///
/// Every vertex reachable from `start` appears exactly once, tagged with
/// its hop distance. Ties within a layer follow edge insertion order.
/// A start vertex the graph does not know yields `[(start, 0)]`.
///
/// # Example
///
/// ```rust
/// use layergraph_core::graph::{layered_bfs, Graph, TraversalStep};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(1, 2, 1u32).unwrap();
/// graph.add_edge(2, 3, 1u32).unwrap();
///
/// let steps = layered_bfs(&graph, 1);
/// assert_eq!(steps[2], TraversalStep::new(3, 2));
/// ```
#[must_use]
pub fn layered_bfs<G: GraphTraversal>(graph: &G, start: VertexId) -> Vec<TraversalStep> {
    layered_bfs_with(graph, start, &TraversalConfig::default())
}

/// Layered BFS from `start` with an explicit configuration.
#[must_use]
pub fn layered_bfs_with<G: GraphTraversal>(
    graph: &G,
    start: VertexId,
    config: &TraversalConfig,
) -> Vec<TraversalStep> {
    let steps = match config.strategy {
        LayerStrategy::DistanceCarrying => distance_carrying(graph, start, config),
        LayerStrategy::FrontierCounting => frontier_counting(graph, start, config),
    };
    tracing::debug!(
        start,
        strategy = ?config.strategy,
        visited = steps.len(),
        "layered bfs complete"
    );
    steps
}

fn distance_carrying<G: GraphTraversal>(
    graph: &G,
    start: VertexId,
    config: &TraversalConfig,
) -> Vec<TraversalStep> {
    let mut results = Vec::new();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    queue.push_back((start, 0usize));

    while let Some((current, layer)) = queue.pop_front() {
        if config.is_full(results.len()) {
            break;
        }
        // Duplicates are enqueued freely and dropped here.
        if !visited.insert(current) {
            continue;
        }
        results.push(TraversalStep::new(current, layer));

        if config.expands(layer) {
            queue.extend(
                graph
                    .outgoing_targets(current)
                    .into_iter()
                    .map(|target| (target, layer + 1)),
            );
        }
    }

    results
}

fn frontier_counting<G: GraphTraversal>(
    graph: &G,
    start: VertexId,
    config: &TraversalConfig,
) -> Vec<TraversalStep> {
    let mut results = Vec::new();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::new();

    queue.push_back(start);

    let mut remaining_in_layer = 1usize;
    let mut at_border = false;
    let mut layer = 0usize;

    while let Some(current) = queue.pop_front() {
        if config.is_full(results.len()) {
            break;
        }

        remaining_in_layer = remaining_in_layer.saturating_sub(1);
        if remaining_in_layer == 0 {
            at_border = true;
        }

        if !visited.insert(current) {
            continue;
        }
        results.push(TraversalStep::new(current, layer));

        if config.expands(layer) {
            queue.extend(graph.outgoing_targets(current));
        }

        // The layer only advances when the border coincides with a fresh visit.
        if at_border {
            remaining_in_layer = queue.len();
            layer += 1;
            at_border = false;
        }
    }

    results
}
