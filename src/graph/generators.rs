use rand::prelude::*;

use crate::graph::{DualGraph, Graph, MutableGraph};
use crate::{Error, Result};

/// Upper bound (exclusive) on generated edge weights
pub const MAX_RANDOM_WEIGHT: u32 = 100;

/// Number of ordered-pair draws made for a graph of `vertex_count` vertices at `density_percent`
pub fn edge_draws(vertex_count: usize, density_percent: u32) -> Result<usize> {
    if density_percent > 100 {
        return Err(Error::InvalidParameter(format!(
            "density must be between 0 and 100 percent, got {}",
            density_percent
        )));
    }

    let max_edges = vertex_count.saturating_sub(1).checked_mul(vertex_count);
    max_edges
        .and_then(|m| m.checked_mul(density_percent as usize))
        .map(|scaled| scaled / 100)
        .ok_or_else(|| {
            Error::InvalidParameter(format!("{} vertices is too many to generate", vertex_count))
        })
}

/// Generates a random directed graph
///
/// Draws `vertex_count * (vertex_count - 1) * density_percent / 100` random ordered
/// pairs with weights in `0..MAX_RANDOM_WEIGHT`. Self pairs are skipped and a pair
/// drawn twice keeps its last weight, so the edge count is usually below the number
/// of draws.
pub fn generate_random_graph<R>(
    vertex_count: usize,
    density_percent: u32,
    rng: &mut R,
) -> Result<DualGraph<u32>>
where
    R: Rng + ?Sized,
{
    let draws = edge_draws(vertex_count, density_percent)?;
    let mut graph = DualGraph::new(vertex_count)?;

    for _ in 0..draws {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        let weight = rng.gen_range(0..MAX_RANDOM_WEIGHT);
        // Avoid self-loops
        if u != v {
            graph.add_edge(u, v, weight)?;
        }
    }

    log::info!(
        "Generated random graph: {} vertices, {} edges from {} draws ({}% density)",
        vertex_count,
        graph.edge_count(),
        draws,
        density_percent
    );

    Ok(graph)
}

/// Reproducible variant of [`generate_random_graph`]
pub fn generate_seeded_graph(
    vertex_count: usize,
    density_percent: u32,
    seed: u64,
) -> Result<DualGraph<u32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_graph(vertex_count, density_percent, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_draws() {
        assert_eq!(edge_draws(10, 50).unwrap(), 45);
        assert_eq!(edge_draws(1, 100).unwrap(), 0);
        assert_eq!(edge_draws(4, 0).unwrap(), 0);
        assert!(edge_draws(4, 101).is_err());
    }

    #[test]
    fn test_generated_graph_has_no_self_loops() {
        let graph = generate_seeded_graph(30, 80, 7).unwrap();
        assert!(graph.edge_count() > 0);
        assert!(graph.edge_count() <= edge_draws(30, 80).unwrap());
        for (u, v, w) in graph.edges() {
            assert_ne!(u, v);
            assert!(w < MAX_RANDOM_WEIGHT);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = generate_seeded_graph(12, 40, 99).unwrap();
        let b = generate_seeded_graph(12, 40, 99).unwrap();
        assert_eq!(a.edges().collect::<Vec<_>>(), b.edges().collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_vertices_rejected() {
        assert!(matches!(generate_seeded_graph(0, 50, 1), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_too_many_vertices_rejected() {
        for density in [0, 50] {
            assert!(matches!(
                generate_seeded_graph(3_000_000_000, density, 1),
                Err(Error::InvalidParameter(_))
            ));
        }
    }
}
