//! Driver for distance-2 coloring runs.
//!
//! This module provides the `ColoringContext` struct, which binds a set of
//! `ColoringOptions` to coloring runs on any `Adjacency` graph, and the
//! `color_distance2` entry point that takes raw `i64` CSR buffers and returns
//! `i32` colors plus dense `f64` seeds.
//!
//! # Usage
//!
//! 1. Construct a `ColoringContext` from `ColoringOptions` (or use `Default`).
//! 2. Call `color`, `color_csr` or `color_i64` to obtain a `Coloring`.
//! 3. Turn it into seeds with `Coloring::seeds`.
//!
//! Every run validates its input before any coloring work and either returns a
//! complete, distance-2 safe coloring or a single error.
//!
//! # References
//! - Gebremedhin, Manne & Pothen (2005). What color is your Jacobian? Graph coloring for computing derivatives. SIAM Review 47(4).
//! - Curtis, Powell & Reid (1974). On the estimation of sparse Jacobian matrices. IMA J. Appl. Math. 13.

use log::{debug, warn};
use crate::coloring::{
    Coloring, Strategy, count_colors, greedy_distance2_coloring, saturation_distance2_coloring,
};
use crate::config::{CheckFlags, ColoringOptions};
use crate::core::traits::Adjacency;
use crate::error::ColoringError;
use crate::graph::{
    CsrGraph, CsrPattern, first_asymmetric_entry, has_sorted_rows, validate_neighbors,
};
use crate::utils::stats::ColoringStats;
use crate::utils::verify::verify_distance2_coloring;

/// Context and configuration for distance-2 coloring runs.
///
/// Holds no graph state between calls; every run allocates and frees its own
/// working memory.
#[derive(Debug, Clone, Default)]
pub struct ColoringContext {
    pub options: ColoringOptions,
}

impl ColoringContext {
    pub fn new(options: ColoringOptions) -> Self {
        Self { options }
    }

    /// Color `g` with the configured ordering, strategy and checks.
    ///
    /// # Returns
    /// * `Ok(Coloring)` with dense color ids and run statistics
    /// * `Err(ColoringError)` if a check, the work ceiling or the ordering fails
    pub fn color<G: Adjacency + Sync>(&self, g: &G) -> Result<Coloring, ColoringError> {
        let opts = &self.options;
        self.check_input(g)?;

        let mut stats = ColoringStats::measure(g);
        debug!(
            "distance-2 coloring: n={}, nnz={}, max_degree={}, work={}, {}",
            stats.n_vertices, stats.nnz, stats.max_degree, stats.distance2_work, opts
        );
        if stats.max_degree > opts.degree_warning {
            warn!(
                "max row degree {} exceeds {}; distance-2 coloring cost grows with the square of the degree (estimated work {})",
                stats.max_degree, opts.degree_warning, stats.distance2_work
            );
        }
        if let Some(limit) = opts.max_work {
            if stats.distance2_work > limit {
                return Err(ColoringError::WorkLimitExceeded { work: stats.distance2_work, limit });
            }
        }

        let (colors, rounds) = match opts.strategy {
            Strategy::Sequential if opts.ordering.is_dynamic() => (saturation_distance2_coloring(g), 1),
            Strategy::Sequential => {
                let order = opts.ordering.order(g)?;
                (greedy_distance2_coloring(g, &order), 1)
            }
            Strategy::Speculative => self.color_speculative(g)?,
        };
        let num_colors = count_colors(&colors);
        stats.num_colors = num_colors;
        stats.rounds = rounds;

        if opts.checks.contains(CheckFlags::VERIFY_COLORING) {
            verify_distance2_coloring(g, &colors, num_colors)?;
        }
        debug!(
            "distance-2 coloring: {} colors for {} vertices in {} round(s)",
            num_colors, stats.n_vertices, rounds
        );
        Ok(Coloring { colors, num_colors, stats })
    }

    /// Color a CSR pattern held in caller-owned `usize` arrays, without copying.
    pub fn color_csr(&self, row_ptr: &[usize], col_idx: &[usize], n_dofs: usize) -> Result<Coloring, ColoringError> {
        let g = CsrGraph::new(row_ptr, col_idx, n_dofs)?;
        self.color(&g)
    }

    /// Color a CSR pattern given as `i64` buffers.
    pub fn color_i64(&self, row_ptr: &[i64], col_idx: &[i64], n_dofs: i64) -> Result<Coloring, ColoringError> {
        let pattern = CsrPattern::from_i64(row_ptr, col_idx, n_dofs)?;
        self.color(&pattern)
    }

    fn check_input<G: Adjacency>(&self, g: &G) -> Result<(), ColoringError> {
        validate_neighbors(g)?;
        let checks = self.options.checks;
        if checks.contains(CheckFlags::SORTED_ROWS) && !has_sorted_rows(g) {
            return Err(ColoringError::InvalidGraph(
                "column indices are not strictly increasing within every row".to_string(),
            ));
        }
        if checks.contains(CheckFlags::SYMMETRY) {
            if let Some((i, j)) = first_asymmetric_entry(g) {
                return Err(ColoringError::InvalidGraph(format!(
                    "pattern is not symmetric: entry ({}, {}) has no mirror ({}, {})",
                    i, j, j, i
                )));
            }
        }
        Ok(())
    }

    #[cfg(feature = "rayon")]
    fn color_speculative<G: Adjacency + Sync>(&self, g: &G) -> Result<(Vec<usize>, usize), ColoringError> {
        let opts = &self.options;
        if opts.ordering.is_dynamic() {
            return Err(ColoringError::Unsupported(
                "saturation ordering cannot drive speculative coloring",
            ));
        }
        let order = opts.ordering.order(g)?;
        debug!(
            "speculative coloring on {} thread(s)",
            crate::parallel::pool_size(opts.num_threads)
        );
        crate::parallel::install(opts.num_threads, || {
            crate::coloring::speculative_distance2_coloring(g, &order)
        })
    }

    #[cfg(not(feature = "rayon"))]
    fn color_speculative<G: Adjacency + Sync>(&self, _g: &G) -> Result<(Vec<usize>, usize), ColoringError> {
        Err(ColoringError::Unsupported("speculative coloring requires the `rayon` feature"))
    }
}

/// Color the distance-2 graph of a CSR pattern and emit colors and seed vectors.
///
/// Uses the default options: largest-first order, sequential greedy, symmetry
/// check on. `n_dofs == 0` is valid and yields no colors and no seeds. The seeds
/// are dense, so the output holds `n_dofs * num_colors` values.
///
/// # Returns
/// * `Ok((colors, seeds))` with `colors[v]` in `0..seeds.len()` and
///   `seeds[c][v] == 1.0` exactly when `colors[v] == c`
/// * `Err(ColoringError::InvalidGraph)` for malformed or asymmetric CSR input
pub fn color_distance2(
    row_ptr: &[i64],
    col_idx: &[i64],
    n_dofs: i64,
) -> Result<(Vec<i32>, Vec<Vec<f64>>), ColoringError> {
    let coloring = ColoringContext::default().color_i64(row_ptr, col_idx, n_dofs)?;
    let colors = coloring.colors_i32()?;
    let seeds = coloring.seeds().to_dense::<f64>();
    Ok((colors, seeds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::VertexOrdering;

    fn star(n: usize) -> Vec<Vec<usize>> {
        let mut g = vec![Vec::new(); n];
        for leaf in 1..n {
            g[0].push(leaf);
            g[leaf].push(0);
        }
        g
    }

    #[test]
    fn default_run_fills_stats() {
        let ctx = ColoringContext::default();
        let c = ctx.color(&star(4)).unwrap();
        assert_eq!(c.num_colors(), 4);
        assert_eq!(c.stats().num_colors, 4);
        assert_eq!(c.stats().rounds, 1);
        assert_eq!(c.stats().max_degree, 3);
    }

    #[test]
    fn work_limit_is_enforced_before_coloring() {
        let ctx = ColoringContext::new(ColoringOptions::new().with_max_work(3));
        let err = ctx.color(&star(4)).unwrap_err();
        assert!(matches!(err, ColoringError::WorkLimitExceeded { limit: 3, .. }));
    }

    #[test]
    fn directed_edge_is_rejected_by_default() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![]];
        assert!(matches!(
            ColoringContext::default().color(&g),
            Err(ColoringError::InvalidGraph(_))
        ));
        // clearing the check hands the precondition to the caller
        let trusted = ColoringContext::new(ColoringOptions::new().with_checks(CheckFlags::empty()));
        assert!(trusted.color(&g).is_ok());
    }

    #[test]
    fn out_of_range_neighbor_is_an_error() {
        let g: Vec<Vec<usize>> = vec![vec![5], vec![]];
        for checks in [CheckFlags::empty(), CheckFlags::ALL] {
            let ctx = ColoringContext::new(ColoringOptions::new().with_checks(checks));
            assert!(matches!(ctx.color(&g), Err(ColoringError::InvalidGraph(_))));
        }
    }

    #[test]
    fn low_degree_threshold_still_colors() {
        let opts = ColoringOptions::new().with_degree_warning(1);
        let c = ColoringContext::new(opts).color(&star(4)).unwrap();
        assert_eq!(c.num_colors(), 4);
        assert!(c.stats().max_degree > 1);
    }

    #[test]
    fn sorted_rows_check() {
        let g: Vec<Vec<usize>> = vec![vec![2, 1], vec![0], vec![0]];
        let ctx = ColoringContext::new(ColoringOptions::new().with_checks(CheckFlags::SORTED_ROWS));
        assert!(matches!(ctx.color(&g), Err(ColoringError::InvalidGraph(_))));
    }

    #[test]
    fn saturation_and_verify() {
        let opts = ColoringOptions::new()
            .with_ordering(VertexOrdering::Saturation)
            .with_checks(CheckFlags::ALL);
        let c = ColoringContext::new(opts).color(&star(5)).unwrap();
        assert_eq!(c.num_colors(), 5);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn speculative_rejects_saturation() {
        let opts = ColoringOptions::new()
            .with_ordering(VertexOrdering::Saturation)
            .with_strategy(Strategy::Speculative);
        assert!(matches!(
            ColoringContext::new(opts).color(&star(3)),
            Err(ColoringError::Unsupported(_))
        ));
    }

    #[test]
    fn primary_entry_point_on_path() {
        // path 0-1-2-3
        let row_ptr = [0, 1, 3, 5, 6];
        let col_idx = [1, 0, 2, 1, 3, 2];
        let (colors, seeds) = color_distance2(&row_ptr, &col_idx, 4).unwrap();
        assert_eq!(colors.len(), 4);
        assert_eq!(seeds.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[0], colors[2]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[1], colors[3]);
        assert_ne!(colors[2], colors[3]);
    }

    #[test]
    fn primary_entry_point_rejects_one_directional_pattern() {
        // lower triangle of the path 0-1-2-3 only
        let err = color_distance2(&[0, 0, 1, 2, 3], &[0, 1, 2], 4).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidGraph(_)));
    }

    #[test]
    fn primary_entry_point_rejects_bad_length() {
        let err = color_distance2(&[0, 0], &[], 3).unwrap_err();
        assert!(matches!(err, ColoringError::InvalidGraph(_)));
    }
}
