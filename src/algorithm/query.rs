use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::timing::try_timed;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{DualGraph, Weight};
use crate::Result;

/// Which storage of a [`DualGraph`] Dijkstra enumerates edges from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    Matrix,
    List,
}

impl Representation {
    pub const ALL: [Representation; 2] = [Representation::Matrix, Representation::List];
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Representation::Matrix => write!(f, "matrix"),
            Representation::List => write!(f, "list"),
        }
    }
}

/// Answer to a single source/destination query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery<W>
where
    W: Weight,
{
    pub source: usize,
    pub destination: usize,
    /// `None` when the destination is unreachable
    pub distance: Option<W::Distance>,
    /// Vertex sequence from source to destination, when reachable
    pub path: Option<Vec<usize>>,
    /// Time spent in the shortest path computation
    pub elapsed: Duration,
}

/// Dijkstra over the adjacency matrix
pub fn shortest_path_via_matrix<W>(
    graph: &DualGraph<W>,
    source: usize,
    destination: usize,
) -> Result<PathQuery<W>>
where
    W: Weight,
{
    shortest_path(graph, Representation::Matrix, source, destination)
}

/// Dijkstra over the adjacency lists
pub fn shortest_path_via_list<W>(
    graph: &DualGraph<W>,
    source: usize,
    destination: usize,
) -> Result<PathQuery<W>>
where
    W: Weight,
{
    shortest_path(graph, Representation::List, source, destination)
}

/// Runs Dijkstra from `source` over the chosen representation and reports `destination`
///
/// Both endpoints are checked before anything runs. The reported time covers the
/// whole computation, distance table setup included, for either representation.
pub fn shortest_path<W>(
    graph: &DualGraph<W>,
    representation: Representation,
    source: usize,
    destination: usize,
) -> Result<PathQuery<W>>
where
    W: Weight,
{
    graph.check_vertex(source)?;
    graph.check_vertex(destination)?;

    let dijkstra = Dijkstra::new();
    let (result, elapsed): (ShortestPathResult<W>, _) = match representation {
        Representation::Matrix => {
            let view = graph.matrix();
            try_timed(|| dijkstra.compute_shortest_paths(&view, source))?
        }
        Representation::List => {
            let view = graph.list();
            try_timed(|| dijkstra.compute_shortest_paths(&view, source))?
        }
    };

    log::debug!(
        "{} query {} -> {} finished in {:?}",
        representation,
        source,
        destination,
        elapsed
    );

    Ok(PathQuery {
        source,
        destination,
        distance: result.distance_to(destination),
        path: result.path_to(destination),
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_representation_names() {
        assert_eq!(Representation::List.to_string(), "list");
        assert_eq!(serde_json::to_string(&Representation::Matrix).unwrap(), "\"matrix\"");
    }

    #[test]
    fn test_destination_out_of_range() {
        let graph = DualGraph::<u32>::new(3).unwrap();
        let err = shortest_path_via_list(&graph, 0, 3).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { vertex: 3, vertex_count: 3 }));
    }
}
