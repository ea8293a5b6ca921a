//! Dijkstra over the adjacency matrix vs the adjacency list on random graphs.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dual_sssp::graph::generators::generate_seeded_graph;
use dual_sssp::{shortest_path, Representation};

/// Seed used for all generated graphs.
const SEED: u64 = 42;

/// Vertex counts to benchmark.
const VERTEX_COUNTS: &[usize] = &[100, 250, 500];

/// Edge densities in percent.
const DENSITIES: &[u32] = &[10, 50, 90];

fn representations(c: &mut Criterion) {
    for &density in DENSITIES {
        let mut group = c.benchmark_group(format!("dijkstra_density_{}", density));
        group.sample_size(20);

        for &vertex_count in VERTEX_COUNTS {
            let graph = generate_seeded_graph(vertex_count, density, SEED).unwrap();
            let destination = vertex_count - 1;

            for representation in Representation::ALL {
                group.bench_with_input(
                    BenchmarkId::new(representation.to_string(), vertex_count),
                    &graph,
                    |b, graph| {
                        b.iter(|| {
                            shortest_path(black_box(graph), representation, 0, destination).unwrap()
                        });
                    },
                );
            }
        }

        group.finish();
    }
}

criterion_group!(benches, representations);
criterion_main!(benches);
