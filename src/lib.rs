//! d2color: distance-2 coloring of CSR sparsity patterns
//!
//! This crate colors the graph of a sparse matrix so that no two vertices within
//! distance 2 share a color, and turns the coloring into seed vectors for
//! compressed finite-difference or matrix-free estimation of sparse Jacobians
//! and Hessians: one probe per color instead of one per degree of freedom.

pub mod parallel;

pub mod coloring;
pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod graph;
pub mod seed;
pub mod utils;

// Re-exports for convenience
pub use coloring::{Coloring, Strategy, VertexOrdering};
pub use config::*;
pub use context::*;
pub use crate::core::Adjacency;
pub use error::*;
pub use graph::{CsrGraph, CsrPattern};
pub use seed::SeedGroups;

// Re-export ColoringStats at the crate root for convenience
pub use utils::stats::ColoringStats;
