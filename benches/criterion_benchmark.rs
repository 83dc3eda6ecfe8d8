use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dfs_visits::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_graph(num_nodes: usize, num_arcs: usize) -> Result<VecGraph<usize>, GraphError> {
    let mut rng = StdRng::seed_from_u64(0);
    let arcs: Vec<_> = (0..num_arcs)
        .map(|_| {
            (
                rng.random_range(0..num_nodes),
                rng.random_range(0..num_nodes),
            )
        })
        .collect();
    VecGraph::from_arcs(0..num_nodes, arcs)
}

fn bench_depth_first(c: &mut Criterion) {
    // Sparse, to keep the recursion shallow
    let graph = random_graph(10_000, 12_000).unwrap();

    let mut group = c.benchmark_group("depth_first");
    group.bench_function("iterative", |b| {
        b.iter(|| {
            let mut sum = 0;
            depth_first::traverse_iterative(&graph, 0, |node| sum += node.value).unwrap();
            black_box(sum)
        })
    });
    group.bench_function("recursive", |b| {
        b.iter(|| {
            let mut sum = 0;
            depth_first::traverse_recursive(&graph, 0, |node| sum += node.value).unwrap();
            black_box(sum)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_depth_first);
criterion_main!(benches);
