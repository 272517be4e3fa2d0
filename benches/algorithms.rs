//! 核心算法基准测试

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphkit::{Graph, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 分层随机流网络：相邻层随机连边并带反向残余边
fn layered_graph(layers: usize, width: usize, seed: u64) -> (Graph<()>, VertexId, VertexId) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new();
    let source = graph.add_vertex(());
    let mut previous = vec![source];

    for _ in 0..layers {
        let layer: Vec<VertexId> = (0..width).map(|_| graph.add_vertex(())).collect();
        for &u in &previous {
            for &v in &layer {
                if rng.gen_bool(0.6) {
                    graph.add_edge(u, v, rng.gen_range(1.0..10.0)).unwrap();
                    graph.add_edge(v, u, 0.0).unwrap();
                }
            }
        }
        previous = layer;
    }

    let sink = graph.add_vertex(());
    for &u in &previous {
        graph.add_edge(u, sink, rng.gen_range(1.0..10.0)).unwrap();
        graph.add_edge(sink, u, 0.0).unwrap();
    }

    (graph, source, sink)
}

fn bench_bfs_path(c: &mut Criterion) {
    let (graph, source, sink) = layered_graph(50, 20, 1);
    c.bench_function("bfs_path", |b| {
        b.iter(|| graph.bfs_path(black_box(source), black_box(sink)).unwrap())
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let (graph, source, _) = layered_graph(50, 20, 2);
    c.bench_function("dijkstra", |b| {
        b.iter(|| graph.dijkstra(black_box(source)).unwrap())
    });
}

fn bench_tarjan_scc(c: &mut Criterion) {
    let (graph, _, _) = layered_graph(50, 20, 3);
    c.bench_function("tarjan_scc", |b| b.iter(|| black_box(graph.scc())));
}

fn bench_dinic(c: &mut Criterion) {
    let (mut graph, source, sink) = layered_graph(20, 10, 4);
    c.bench_function("dinics_algorithm", |b| {
        b.iter(|| graph.dinics_algorithm(black_box(source), black_box(sink)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_bfs_path,
    bench_dijkstra,
    bench_tarjan_scc,
    bench_dinic
);
criterion_main!(benches);
