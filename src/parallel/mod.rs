//! Thread-pool plumbing for the parallel coloring strategy.

#[cfg(feature="rayon")]
pub mod rayon_pool;
#[cfg(feature="rayon")]
pub use rayon_pool::{install, pool_size};
