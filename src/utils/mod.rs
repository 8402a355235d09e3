//! Utilities: run statistics and coloring verification.

pub mod stats;
pub use stats::{ColoringStats, distance2_work};
pub mod verify;
pub use verify::{find_distance2_conflict, is_dense, verify_distance2_coloring};
