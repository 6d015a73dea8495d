//! Tests for Graph construction and adjacency queries.

use super::reference::{reference_graph, REFERENCE_EDGES};
use super::store::Graph;
use super::types::Edge;
use crate::error::Error;

fn build_test_graph() -> Graph<u32> {
    let mut graph = Graph::new(3);
    graph.add_edge(1, 2, 4).unwrap();
    graph.add_edge(1, 3, 6).unwrap();
    graph.add_edge(2, 3, 1).unwrap();
    graph.add_edge(1, 2, 9).unwrap();
    graph
}

#[test]
fn test_new_graph_is_empty() {
    let graph: Graph<u32> = Graph::new(5);
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.edges().is_empty());
}

#[test]
fn test_try_new_rejects_zero_vertices() {
    let result = Graph::<u32>::try_new(0);
    assert!(matches!(result, Err(Error::InvalidVertexCount(0))));
    assert!(Graph::<u32>::try_new(1).is_ok());
}

#[test]
fn test_zero_vertex_graph_rejects_every_edge() {
    let mut graph: Graph<u32> = Graph::new(0);
    assert_eq!(graph.vertices().count(), 0);
    assert!(graph.add_edge(1, 1, 1).is_err());
    assert!(graph.add_edge(0, 0, 1).is_err());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_vertices_range() {
    let graph: Graph<u32> = Graph::new(4);
    assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert!(graph.contains_vertex(1));
    assert!(graph.contains_vertex(4));
    assert!(!graph.contains_vertex(0));
    assert!(!graph.contains_vertex(5));
}

#[test]
fn test_add_edge_keeps_insertion_order() {
    let graph = build_test_graph();
    assert_eq!(
        graph.edges(),
        &[
            Edge::new(1, 2, 4),
            Edge::new(1, 3, 6),
            Edge::new(2, 3, 1),
            Edge::new(1, 2, 9),
        ]
    );
}

#[test]
fn test_add_edge_out_of_bounds_rejected() {
    let mut graph = build_test_graph();
    let before = graph.edge_count();

    for (src, dest) in [(0, 1), (1, 0), (4, 1), (1, 4), (100, 200)] {
        let result = graph.add_edge(src, dest, 1);
        assert!(
            matches!(result, Err(Error::VertexOutOfBounds { vertex_count: 3, .. })),
            "edge {src} -> {dest} should be rejected"
        );
    }

    assert_eq!(graph.edge_count(), before);
}

#[test]
fn test_boundary_vertices_accepted() {
    let mut graph: Graph<u32> = Graph::new(3);
    assert!(graph.add_edge(1, 3, 0).is_ok());
    assert!(graph.add_edge(3, 1, 0).is_ok());
    assert!(graph.add_edge(3, 3, 0).is_ok());
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_parallel_edges_not_deduplicated() {
    let mut graph: Graph<u32> = Graph::new(2);
    graph.add_edge(1, 2, 5).unwrap();
    graph.add_edge(1, 2, 5).unwrap();
    assert_eq!(graph.outgoing_edges(1).len(), 2);
}

#[test]
fn test_outgoing_edges() {
    let graph = build_test_graph();
    let outgoing = graph.outgoing_edges(1);
    let targets: Vec<usize> = outgoing.iter().map(Edge::dest).collect();
    assert_eq!(targets, vec![2, 3, 2]);
    assert!(graph.outgoing_edges(3).is_empty());
}

#[test]
fn test_outgoing_edges_unknown_vertex_is_empty() {
    let graph = build_test_graph();
    assert!(graph.outgoing_edges(0).is_empty());
    assert!(graph.outgoing_edges(42).is_empty());
}

#[test]
fn test_add_edges_counts_accepted() {
    let mut graph: Graph<u32> = Graph::new(3);
    let accepted = graph.add_edges([(1, 2, 1), (2, 9, 1), (3, 1, 1)]);
    assert_eq!(accepted, 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_from_edge_list_drops_invalid() {
    let graph = Graph::from_edge_list(2, [(1, 2, 1.5f32), (2, 3, 2.5), (2, 1, 0.5)]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edges()[1], Edge::new(2, 1, 0.5));
}

#[test]
fn test_reference_graph_shape() {
    let graph = reference_graph::<u32>();
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), REFERENCE_EDGES.len());

    let from_4: Vec<usize> = graph.outgoing_iter(4).map(|e| e.dest()).collect();
    assert_eq!(from_4, vec![2, 3, 5, 6, 8]);
}
