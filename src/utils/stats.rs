//! Size & cost statistics for a coloring run.

use crate::core::traits::Adjacency;

/// Graph size, distance-2 cost and outcome of one coloring run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColoringStats {
    pub n_vertices: usize,
    pub nnz: usize,
    pub max_degree: usize,
    pub distance2_work: u64,
    pub num_colors: usize,
    /// 1 for sequential strategies, the number of speculative rounds otherwise.
    pub rounds: usize,
}

impl ColoringStats {
    /// Measure `g` before coloring; `num_colors` and `rounds` are filled in later.
    pub fn measure<G: Adjacency>(g: &G) -> Self {
        Self {
            n_vertices: g.n_vertices(),
            nnz: g.nnz(),
            max_degree: g.max_degree(),
            distance2_work: distance2_work(g),
            num_colors: 0,
            rounds: 0,
        }
    }

    /// Vertices per color, i.e. how many single-vertex probes one seed replaces.
    pub fn compression_ratio(&self) -> f64 {
        if self.num_colors == 0 {
            return 1.0;
        }
        self.n_vertices as f64 / self.num_colors as f64
    }
}

/// Entries touched by one full distance-2 sweep: `Σ_v Σ_{u ∈ N(v)} (1 + deg(u))`.
///
/// Computed in O(nnz). This is what a greedy pass over every vertex costs, and
/// grows quadratically with the degree of dense rows.
pub fn distance2_work<G: Adjacency>(g: &G) -> u64 {
    (0..g.n_vertices())
        .map(|v| {
            g.neighbors(v)
                .iter()
                .map(|&u| 1 + g.degree(u) as u64)
                .sum::<u64>()
        })
        .sum()
}
