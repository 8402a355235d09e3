//! Configuration for coloring runs.

pub mod options;
pub use options::{CheckFlags, ColoringOptions, DEFAULT_DEGREE_WARNING};
