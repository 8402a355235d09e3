//! Distance-2 coloring engines.
//!
//! This module defines the `Coloring` result and the `Strategy` switch, and
//! includes the sequential greedy engine, the saturation-ordered engine and the
//! speculative parallel engine, together with the vertex orderings they use.

use crate::error::ColoringError;
use crate::seed::SeedGroups;
use crate::utils::stats::ColoringStats;

pub mod forbidden;
pub mod greedy;
pub mod ordering;
pub mod saturation;
#[cfg(feature = "rayon")]
pub mod speculative;

pub use forbidden::UNCOLORED;
pub use greedy::{count_colors, greedy_distance2_coloring};
pub use ordering::VertexOrdering;
pub use saturation::saturation_distance2_coloring;
#[cfg(feature = "rayon")]
pub use speculative::speculative_distance2_coloring;

/// How the coloring is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One vertex at a time in the selected order. Deterministic.
    #[default]
    Sequential,
    /// Parallel tentative coloring with conflict repair (needs the `rayon`
    /// feature). Deterministic for a fixed order and any thread count, but
    /// not equal to the sequential result.
    Speculative,
}

/// A finished distance-2 coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    pub(crate) colors: Vec<usize>,
    pub(crate) num_colors: usize,
    pub(crate) stats: ColoringStats,
}

impl Coloring {
    /// `colors()[v]` is the color of vertex `v`, in `0..num_colors()`.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    pub fn stats(&self) -> &ColoringStats {
        &self.stats
    }

    /// Consume into the color array.
    pub fn into_colors(self) -> Vec<usize> {
        self.colors
    }

    /// Number of colored vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color_of(&self, v: usize) -> Option<usize> {
        self.colors.get(v).copied()
    }

    /// Vertices grouped by color.
    pub fn seeds(&self) -> SeedGroups {
        SeedGroups::group(&self.colors, self.num_colors)
    }

    /// Colors as `i32`, the width host numeric arrays expect.
    pub fn colors_i32(&self) -> Result<Vec<i32>, ColoringError> {
        if i32::try_from(self.num_colors).is_err() {
            return Err(ColoringError::ColorOverflow(self.num_colors));
        }
        Ok(self.colors.iter().map(|&c| c as i32).collect())
    }
}
