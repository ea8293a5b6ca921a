use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::algorithm::query::{shortest_path, PathQuery, Representation};
use crate::benchmark::{compare_representations, ComparisonReport};
use crate::graph::{generators, io, render, DualGraph};
use crate::{Error, Result};

/// Owner of the graph currently being worked on
///
/// Starts empty. Loading or generating replaces the graph only when the new one
/// was built successfully; a failed load keeps the previous graph.
#[derive(Debug)]
pub struct Session {
    graph: Option<DualGraph<u32>>,
    /// Density of the current graph when it was generated rather than loaded
    density_percent: Option<u32>,
    rng: StdRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates an empty session with reproducible randomness
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Session {
            graph: None,
            density_percent: None,
            rng,
        }
    }

    /// The current graph
    pub fn graph(&self) -> Result<&DualGraph<u32>> {
        self.graph.as_ref().ok_or(Error::NoGraph)
    }

    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }

    /// Replaces the current graph, returning the previous one
    pub fn replace_graph(&mut self, graph: DualGraph<u32>) -> Option<DualGraph<u32>> {
        self.density_percent = None;
        self.graph.replace(graph)
    }

    /// Loads the graph from a file
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&DualGraph<u32>> {
        let graph = io::read_graph_file(path)?;
        self.replace_graph(graph);
        self.graph()
    }

    /// Loads the graph from text in the file format
    pub fn load_str(&mut self, text: &str) -> Result<&DualGraph<u32>> {
        let graph = io::parse_graph(text)?;
        self.replace_graph(graph);
        self.graph()
    }

    /// Generates a random graph with the session's random source
    pub fn generate(
        &mut self,
        vertex_count: usize,
        density_percent: u32,
    ) -> Result<&DualGraph<u32>> {
        let graph =
            generators::generate_random_graph(vertex_count, density_percent, &mut self.rng)?;
        self.replace_graph(graph);
        self.density_percent = Some(density_percent);
        self.graph()
    }

    /// Saves the current graph in the file format
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        io::write_graph_file(self.graph()?, path)
    }

    /// Both representations as text
    pub fn render(&self) -> Result<String> {
        Ok(render::render_graph(self.graph()?))
    }

    /// Runs one query over the chosen representation
    pub fn shortest_path(
        &self,
        representation: Representation,
        source: usize,
        destination: usize,
    ) -> Result<PathQuery<u32>> {
        shortest_path(self.graph()?, representation, source, destination)
    }

    /// Compares both representations on `instances` random queries
    pub fn benchmark(&mut self, instances: usize) -> Result<ComparisonReport> {
        let graph = self.graph.as_ref().ok_or(Error::NoGraph)?;
        let report = compare_representations(graph, instances, &mut self.rng)?;
        Ok(match self.density_percent {
            Some(density) => report.with_density(density),
            None => report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_has_no_graph() {
        let mut session = Session::seeded(1);
        assert!(!session.has_graph());
        assert!(matches!(session.graph(), Err(Error::NoGraph)));
        assert!(matches!(session.render(), Err(Error::NoGraph)));
        assert!(matches!(
            session.shortest_path(Representation::List, 0, 0),
            Err(Error::NoGraph)
        ));
        assert!(matches!(session.benchmark(3), Err(Error::NoGraph)));
    }

    #[test]
    fn test_failed_load_keeps_previous_graph() {
        let mut session = Session::seeded(1);
        session.load_str("2 1\n0 1 5\n").unwrap();
        assert!(session.load_str("2 1\n0 9 5\n").is_err());

        let query = session.shortest_path(Representation::Matrix, 0, 1).unwrap();
        assert_eq!(query.distance, Some(5));
    }

    #[test]
    fn test_generate_records_density() {
        let mut session = Session::seeded(5);
        session.generate(15, 60).unwrap();
        let report = session.benchmark(4).unwrap();
        assert_eq!(report.density_percent, Some(60));
        assert_eq!(report.instances, 4);

        session.load_str("1 0").unwrap();
        let report = session.benchmark(2).unwrap();
        assert_eq!(report.density_percent, None);
    }
}
