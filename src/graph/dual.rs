use std::mem;

use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed graph stored both as an adjacency matrix and as adjacency lists
///
/// Both representations always describe the same edge set: inserting an ordered
/// pair that already exists overwrites its weight in the matrix cell and in the
/// list entry, which keeps its place in the list.
#[derive(Debug, Clone)]
pub struct DualGraph<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Dense weight table, `None` meaning "no edge"
    matrix: Vec<Vec<Option<W>>>,

    /// Outgoing edges for each vertex in insertion order: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of distinct ordered pairs
    edge_count: usize,
}

impl<W> DualGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(Error::InvalidParameter(
                "a graph needs at least one vertex".to_string(),
            ));
        }

        let too_large = || {
            Error::InvalidParameter(format!(
                "{} vertices do not fit in an adjacency matrix",
                vertex_count
            ))
        };

        // V * V cells, checked in bytes before anything is allocated
        vertex_count
            .checked_mul(vertex_count)
            .and_then(|cells| cells.checked_mul(mem::size_of::<Option<W>>()))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or_else(too_large)?;

        let mut matrix = Vec::new();
        matrix.try_reserve_exact(vertex_count).map_err(|_| too_large())?;
        for _ in 0..vertex_count {
            let mut row = Vec::new();
            row.try_reserve_exact(vertex_count).map_err(|_| too_large())?;
            row.resize(vertex_count, None);
            matrix.push(row);
        }

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count).map_err(|_| too_large())?;
        adjacency.resize_with(vertex_count, Vec::new);

        Ok(DualGraph {
            vertex_count,
            matrix,
            adjacency,
            edge_count: 0,
        })
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertex_count)?;
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Borrow the dense representation
    pub fn matrix(&self) -> MatrixView<'_, W> {
        MatrixView { graph: self }
    }

    /// Borrow the sparse representation
    pub fn list(&self) -> ListView<'_, W> {
        ListView { graph: self }
    }

    /// Iterates over all edges as `(from, to, weight)` in adjacency order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |&(to, weight)| (from, to, weight)))
    }

    /// Raw matrix row for `vertex`
    pub fn matrix_row(&self, vertex: usize) -> Option<&[Option<W>]> {
        self.matrix.get(vertex).map(Vec::as_slice)
    }

    /// Raw adjacency list for `vertex`
    pub fn adjacency_list(&self, vertex: usize) -> Option<&[(usize, W)]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Fails with `OutOfRange` unless `vertex` is a valid index
    pub fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}

impl<W> Graph<W> for DualGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    // The owning graph enumerates through its lists; use `matrix()` for the dense scan.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.matrix.get(from).and_then(|row| row.get(to)).copied().flatten()
    }
}

impl<W> MutableGraph<W> for DualGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        let cell = &mut self.matrix[from][to];
        if cell.is_some() {
            // Existing pair: overwrite in place in both representations
            *cell = Some(weight);
            if let Some(edge) = self.adjacency[from].iter_mut().find(|(target, _)| *target == to) {
                edge.1 = weight;
            }
            return Ok(());
        }

        *cell = Some(weight);
        self.adjacency[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }
}

/// Dense view: outgoing edges come from a full row scan of the matrix
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, W>
where
    W: Weight,
{
    graph: &'a DualGraph<W>,
}

impl<'a, W> Graph<W> for MatrixView<'a, W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.graph
            .matrix
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(row) = self.graph.matrix.get(vertex) {
            Box::new(
                row.iter()
                    .enumerate()
                    .filter_map(|(target, cell)| cell.map(|weight| (target, weight))),
            )
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.graph.get_edge_weight(from, to)
    }
}

/// Sparse view: outgoing edges come from the per-vertex adjacency list
#[derive(Debug, Clone, Copy)]
pub struct ListView<'a, W>
where
    W: Weight,
{
    graph: &'a DualGraph<W>,
}

impl<'a, W> Graph<W> for ListView<'a, W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.graph.adjacency.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.graph.adjacency.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.graph
            .adjacency
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}
