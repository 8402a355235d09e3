//! Seed vectors derived from a distance-2 coloring.
//!
//! A seed for color `c` is the indicator vector of the vertices colored `c`.
//! Probing a Jacobian with seed `c` recovers every column of that color at once,
//! because no two of them touch a common row.
//!
//! `SeedGroups` keeps the seeds compactly as one sorted vertex list per color
//! (O(n) total). Dense seeds are only built on request: `to_dense` and `to_mat`
//! allocate `n * num_colors` entries.

use faer::Mat;
use num_traits::Float;
use crate::error::ColoringError;

/// Vertices of each color, stored CSR-style: color `c` owns
/// `members[offsets[c]..offsets[c + 1]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedGroups {
    n_dofs: usize,
    offsets: Vec<usize>,
    members: Vec<usize>,
}

impl SeedGroups {
    /// Group a coloring by color.
    ///
    /// Fails with `InvalidColoring` if any color is `>= num_colors` or if some id
    /// in `0..num_colors` is unused.
    pub fn from_colors(colors: &[usize], num_colors: usize) -> Result<Self, ColoringError> {
        if let Some(v) = colors.iter().position(|&c| c >= num_colors) {
            return Err(ColoringError::InvalidColoring(format!(
                "vertex {} has color {} but only {} colors exist",
                v, colors[v], num_colors
            )));
        }
        let groups = Self::group(colors, num_colors);
        if let Some(c) = (0..num_colors).find(|&c| groups.offsets[c] == groups.offsets[c + 1]) {
            return Err(ColoringError::InvalidColoring(format!("color {} is never used", c)));
        }
        Ok(groups)
    }

    /// Counting sort of vertices by color; `colors` must be `< num_colors`.
    pub(crate) fn group(colors: &[usize], num_colors: usize) -> Self {
        let mut offsets = vec![0usize; num_colors + 1];
        for &c in colors {
            offsets[c + 1] += 1;
        }
        for c in 0..num_colors {
            offsets[c + 1] += offsets[c];
        }
        let mut next = offsets.clone();
        let mut members = vec![0usize; colors.len()];
        for (v, &c) in colors.iter().enumerate() {
            members[next[c]] = v;
            next[c] += 1;
        }
        Self { n_dofs: colors.len(), offsets, members }
    }

    pub fn n_dofs(&self) -> usize {
        self.n_dofs
    }

    pub fn num_colors(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Vertices colored `c`, ascending.
    pub fn members(&self, c: usize) -> &[usize] {
        &self.members[self.offsets[c]..self.offsets[c + 1]]
    }

    /// Vertex lists of all colors, in color order.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.num_colors()).map(move |c| self.members(c))
    }

    /// Dense seed of color `c`: one at its members, zero elsewhere.
    pub fn dense_seed<T: Float>(&self, c: usize) -> Vec<T> {
        let mut seed = vec![T::zero(); self.n_dofs];
        for &v in self.members(c) {
            seed[v] = T::one();
        }
        seed
    }

    /// All dense seeds, `num_colors` vectors of length `n_dofs`.
    #[cfg(not(feature = "rayon"))]
    pub fn to_dense<T: Float + Send>(&self) -> Vec<Vec<T>> {
        (0..self.num_colors()).map(|c| self.dense_seed(c)).collect()
    }

    /// All dense seeds, `num_colors` vectors of length `n_dofs`, built in parallel.
    #[cfg(feature = "rayon")]
    pub fn to_dense<T: Float + Send>(&self) -> Vec<Vec<T>> {
        use rayon::prelude::*;
        (0..self.num_colors()).into_par_iter().map(|c| self.dense_seed(c)).collect()
    }

    /// Seed matrix `S` of shape `n_dofs x num_colors`; column `c` is seed `c`,
    /// so `J * S` is the compressed Jacobian.
    pub fn to_mat<T: Float>(&self) -> Mat<T> {
        let mut color_of = vec![0usize; self.n_dofs];
        for (c, group) in self.iter().enumerate() {
            for &v in group {
                color_of[v] = c;
            }
        }
        Mat::from_fn(self.n_dofs, self.num_colors(), |i, j| {
            if color_of[i] == j { T::one() } else { T::zero() }
        })
    }
}
