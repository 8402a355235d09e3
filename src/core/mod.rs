//! Core traits shared by the graph view and the coloring engine.

pub mod traits;
pub use traits::Adjacency;
