use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tiestrength::algo::{compute_ties, tie_strengths, top_k, TieStrengthConfig};
use tiestrength::graph::{AdjacencyModel, NodeId, NodeRegistry};

/// Random collaboration graph with roughly `avg_degree` collaborators per node
fn build_graph(size: usize, avg_degree: usize) -> (NodeRegistry, AdjacencyModel) {
    let mut rng = StdRng::seed_from_u64(2024);
    let registry = NodeRegistry::from_labels((1..=size).map(|i| format!("Author{}", i)));
    let records = (1..=size as NodeId).map(|source| {
        let dests = (0..avg_degree / 2)
            .map(|_| rng.gen_range(1..=size as NodeId))
            .collect();
        (source, dests)
    });
    let model = AdjacencyModel::from_records(size, records.collect::<Vec<_>>()).unwrap();
    (registry, model)
}

/// Benchmark a single focal node against the whole graph
fn bench_focal_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("focal_similarity");

    for size in [1_000, 10_000].iter() {
        let (_, model) = build_graph(*size, 8);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| tie_strengths(&model, 1));
        });
    }
    group.finish();
}

/// Benchmark bounded top-k against candidate lists of growing length
fn bench_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");
    let mut rng = StdRng::seed_from_u64(7);

    for size in [1_000, 100_000].iter() {
        let candidates: Vec<(NodeId, f64)> = (1..=*size as NodeId).map(|id| (id, rng.gen::<f64>())).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| top_k(candidates.iter().copied(), 3));
        });
    }
    group.finish();
}

/// Benchmark the full all-pairs run, sequential and parallel
fn bench_all_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_pairs");
    group.sample_size(10);

    let (registry, model) = build_graph(1_000, 8);
    for parallel in [false, true] {
        let config = TieStrengthConfig { parallel, ..Default::default() };
        let name = if parallel { "parallel" } else { "sequential" };
        group.bench_function(name, |b| {
            b.iter(|| compute_ties(&registry, &model, &config).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_focal_similarity, bench_top_k, bench_all_pairs);
criterion_main!(benches);
