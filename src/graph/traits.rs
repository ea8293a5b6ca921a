use std::fmt::Debug;

use num_traits::{PrimInt, Unsigned};

use crate::Result;

/// Edge weight bound: non-negative primitive integers
///
/// Negative weights are ruled out by the type, which is what keeps Dijkstra sound.
/// Path lengths are summed in the wider [`Weight::Distance`] type, so a path made
/// of several maximal edges still has its exact length.
pub trait Weight: PrimInt + Unsigned + Debug {
    /// Accumulator for sums of weights along a path
    type Distance: PrimInt + Unsigned + Debug + From<Self>;
}

macro_rules! impl_weight {
    ($($weight:ty => $distance:ty),* $(,)?) => {
        $(
            impl Weight for $weight {
                type Distance = $distance;
            }
        )*
    };
}

impl_weight!(u8 => u64, u16 => u64, u32 => u64, u64 => u128);

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a directed edge, overwriting the weight if the ordered pair already exists
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
