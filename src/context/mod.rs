//! Context module for d2color.
//!
//! This module provides the context type that binds coloring options to runs
//! and the primary `color_distance2` entry point used by binding layers.
//!
//! Modules:
//! - [`coloring_context`]: Contains the `ColoringContext` struct and `color_distance2`.
//!
//! # Example
//! ```rust
//! use d2color::context::color_distance2;
//! // isolated vertices share a single color
//! let (colors, seeds) = color_distance2(&[0, 0, 0, 0], &[], 3).unwrap();
//! assert_eq!(colors, vec![0, 0, 0]);
//! assert_eq!(seeds, vec![vec![1.0, 1.0, 1.0]]);
//! ```

pub mod coloring_context;
pub use coloring_context::{ColoringContext, color_distance2};
