//! Layered BFS throughput on synthetic graphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use layergraph_core::{layered_bfs_with, Graph, LayerStrategy, TraversalConfig};

/// Ring with skip edges: every vertex links to its next `fanout` successors.
fn ring_graph(vertex_count: usize, fanout: usize) -> Graph<u32> {
    let mut graph = Graph::with_capacity(vertex_count, vertex_count * fanout);
    for src in 1..=vertex_count {
        for hop in 1..=fanout {
            let dest = (src + hop * hop - 1) % vertex_count + 1;
            let _ = graph.add_edge(src, dest, 1);
        }
    }
    graph
}

fn bench_layered_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("layered_bfs");
    for &size in &[100usize, 500, 1_000] {
        let graph = ring_graph(size, 4);
        for strategy in [LayerStrategy::DistanceCarrying, LayerStrategy::FrontierCounting] {
            let config = TraversalConfig::new(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), size),
                &graph,
                |b, graph| b.iter(|| layered_bfs_with(black_box(graph), 1, &config)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_layered_bfs);
criterion_main!(benches);
