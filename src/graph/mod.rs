pub mod dual;
pub mod generators;
pub mod io;
pub mod render;
pub mod traits;

pub use dual::{DualGraph, ListView, MatrixView};
pub use traits::{Graph, MutableGraph, Weight};
