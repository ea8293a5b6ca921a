//! Dual SSSP - Dijkstra over two graph representations
//!
//! This library computes single-source shortest paths on weighted directed graphs
//! with Dijkstra's algorithm and a lazy-deletion binary min-heap. Every graph is
//! stored twice, as a dense adjacency matrix and as a sparse adjacency list, so the
//! same algorithm can be timed over both representations and compared.

pub mod algorithm;
pub mod benchmark;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod menu;
pub mod session;

pub use algorithm::{
    dijkstra::Dijkstra,
    query::{
        shortest_path, shortest_path_via_list, shortest_path_via_matrix, PathQuery, Representation,
    },
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::dual::DualGraph;
pub use session::Session;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("No graph has been loaded or generated yet")]
    NoGraph,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
