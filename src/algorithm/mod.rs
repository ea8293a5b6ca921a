pub mod traits;
pub mod dijkstra;
pub mod query;
pub mod timing;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
