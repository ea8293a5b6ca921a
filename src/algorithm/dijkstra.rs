use num_traits::{CheckedAdd, Zero};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with lazy deletion
///
/// Improved distances are pushed as new heap entries; an entry whose stored
/// distance is larger than the current best for its vertex is skipped when popped.
/// The edge enumeration comes from the graph, so the same algorithm runs over
/// [`MatrixView`](crate::graph::MatrixView) and [`ListView`](crate::graph::ListView).
#[derive(Debug, Default)]
pub struct Dijkstra;

/// Work counters for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DijkstraStats {
    pub settled: usize,
    pub stale_pops: usize,
    pub relaxations: usize,
    pub heap_pushes: usize,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Runs the algorithm and also returns the work counters
    pub fn run_with_stats<W, G>(
        &self,
        graph: &G,
        source: usize,
    ) -> Result<(ShortestPathResult<W>, DijkstraStats)>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::OutOfRange {
                vertex: source,
                vertex_count: n,
            });
        }

        let mut distances: Vec<Option<W::Distance>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut stats = DijkstraStats::default();

        distances[source] = Some(W::Distance::zero());

        let mut queue = MinHeap::new();
        queue.insert(W::Distance::zero(), source);
        stats.heap_pushes += 1;

        while !queue.is_empty() {
            let (dist_u, u) = queue.extract_min()?;

            // A shorter path to u was found after this entry was pushed
            match distances[u] {
                Some(current) if dist_u > current => {
                    stats.stale_pops += 1;
                    continue;
                }
                _ => {}
            }
            stats.settled += 1;

            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u
                    .checked_add(&<W::Distance as From<W>>::from(weight))
                    .ok_or(Error::InvalidState("path length overflows the distance type"))?;

                let should_update = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.insert(new_dist, v);
                    stats.relaxations += 1;
                    stats.heap_pushes += 1;
                }
            }
        }

        log::debug!(
            "Dijkstra from {}: settled={} stale={} relaxations={} pushes={}",
            source,
            stats.settled,
            stats.stale_pops,
            stats.relaxations,
            stats.heap_pushes
        );

        Ok((
            ShortestPathResult {
                distances,
                predecessors,
                source,
            },
            stats,
        ))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        self.run_with_stats(graph, source).map(|(result, _)| result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DualGraph;

    #[test]
    fn test_stale_entries_are_skipped() {
        // 0->1 is pushed at 10, then improved to 2 through 0->2->1
        let graph = DualGraph::<u32>::from_edges(3, [(0, 1, 10), (0, 2, 1), (2, 1, 1)]).unwrap();
        let (result, stats) = Dijkstra::new().run_with_stats(&graph.list(), 0).unwrap();

        assert_eq!(result.distances, vec![Some(0), Some(2), Some(1)]);
        assert_eq!(stats.settled, 3);
        assert_eq!(stats.stale_pops, 1);
        assert_eq!(stats.heap_pushes, 4);
    }

    #[test]
    fn test_source_out_of_range() {
        let graph = DualGraph::<u32>::new(2).unwrap();
        let result = Dijkstra::new().compute_shortest_paths(&graph.matrix(), 5);
        assert!(matches!(
            result,
            Err(Error::OutOfRange { vertex: 5, vertex_count: 2 })
        ));
    }

    #[test]
    fn test_path_sums_exceed_the_weight_type() {
        let graph = DualGraph::<u8>::from_edges(3, [(0, 1, 200), (1, 2, 200)]).unwrap();
        let result = Dijkstra::new().compute_shortest_paths(&graph.list(), 0).unwrap();
        assert_eq!(result.distances, vec![Some(0), Some(200), Some(400)]);
    }

    #[test]
    fn test_long_u32_paths_keep_exact_lengths() {
        // Both routes exceed u32::MAX and differ by one
        let graph = DualGraph::<u32>::from_edges(
            4,
            [(0, 1, u32::MAX), (1, 3, 10), (0, 2, u32::MAX), (2, 3, 9)],
        )
        .unwrap();

        for result in [
            Dijkstra::new().compute_shortest_paths(&graph.matrix(), 0).unwrap(),
            Dijkstra::new().compute_shortest_paths(&graph.list(), 0).unwrap(),
        ] {
            assert_eq!(result.distance_to(3), Some(u64::from(u32::MAX) + 9));
            assert_eq!(result.path_to(3), Some(vec![0, 2, 3]));
        }
    }
}
