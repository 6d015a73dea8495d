//! Text rendering of graphs and traversal results.

use std::fmt::Write as _;

use super::store::Graph;
use super::types::{TraversalStep, Weight};

/// Renders the adjacency of every vertex `1..=N`.
///
/// Each line reads `v:\t{dest: weight}, {dest: weight}, ` with edges in
/// insertion order. Vertices without outgoing edges still get a line.
#[must_use]
pub fn render_adjacency<T: Weight>(graph: &Graph<T>) -> String {
    let mut out = String::new();
    for v in graph.vertices() {
        let _ = write!(out, "{v}:\t");
        for edge in graph.outgoing_iter(v) {
            let _ = write!(out, "{{{}: {}}}, ", edge.dest(), edge.weight());
        }
        out.push('\n');
    }
    out
}

/// Renders traversal steps as `vertex, layer` lines.
#[must_use]
pub fn render_traversal(steps: &[TraversalStep]) -> String {
    steps.iter().fold(String::new(), |mut out, step| {
        let _ = writeln!(out, "{}, {}", step.vertex, step.layer);
        out
    })
}
