//! Speculative parallel distance-2 coloring (rayon).
//!
//! Rounds of two parallel phases over the still-uncolored vertices:
//! 1. tentative coloring against a snapshot of the committed colors;
//! 2. conflict detection: a vertex keeps its color unless a distance-2
//!    neighbor colored in the same round got the same color and comes earlier
//!    in `order`. Losers go back to the pending list.
//!
//! The earliest pending vertex never loses, so every round commits at least
//! one vertex. Both phases read only the snapshot, which makes the output a
//! function of the graph and `order` alone, independent of the thread count.
//! It generally differs from the sequential result for the same order.

use log::debug;
use rayon::prelude::*;
use crate::coloring::forbidden::{ForbiddenColors, UNCOLORED};
use crate::core::traits::Adjacency;

/// Color `g` speculatively in parallel. Returns the colors and the number of rounds.
pub fn speculative_distance2_coloring<G>(g: &G, order: &[usize]) -> (Vec<usize>, usize)
where
    G: Adjacency + Sync,
{
    let n = g.n_vertices();
    debug_assert_eq!(order.len(), n);
    let mut rank = vec![0usize; n];
    for (r, &v) in order.iter().enumerate() {
        rank[v] = r;
    }
    let mut colors = vec![UNCOLORED; n];
    let mut in_round = vec![false; n];
    let mut pending: Vec<usize> = order.to_vec();
    let mut rounds = 0;

    while !pending.is_empty() {
        rounds += 1;
        let tentative: Vec<usize> = pending
            .par_iter()
            .map_init(ForbiddenColors::new, |forbidden, &v| forbidden.smallest_available(g, v, &colors))
            .collect();
        for (&v, &c) in pending.iter().zip(&tentative) {
            colors[v] = c;
            in_round[v] = true;
        }

        let losers: Vec<usize> = pending
            .par_iter()
            .copied()
            .filter(|&v| {
                let c = colors[v];
                let mut lost = false;
                g.for_each_distance2(v, |w| {
                    if in_round[w] && colors[w] == c && rank[w] < rank[v] {
                        lost = true;
                    }
                });
                lost
            })
            .collect();

        for &v in &pending {
            in_round[v] = false;
        }
        for &v in &losers {
            colors[v] = UNCOLORED;
        }
        debug!(
            "speculative round {}: {} tentative, {} conflicts",
            rounds,
            pending.len(),
            losers.len()
        );
        pending = losers;
    }
    (colors, rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::greedy::count_colors;

    fn grid(nx: usize, ny: usize) -> Vec<Vec<usize>> {
        let id = |i: usize, j: usize| i * ny + j;
        let mut adj = vec![Vec::new(); nx * ny];
        for i in 0..nx {
            for j in 0..ny {
                let v = id(i, j);
                if i > 0 { adj[v].push(id(i - 1, j)); }
                if j > 0 { adj[v].push(id(i, j - 1)); }
                if j + 1 < ny { adj[v].push(id(i, j + 1)); }
                if i + 1 < nx { adj[v].push(id(i + 1, j)); }
            }
        }
        adj
    }

    #[test]
    fn isolated_vertices_finish_in_one_round() {
        let g: Vec<Vec<usize>> = vec![Vec::new(); 8];
        let order: Vec<usize> = (0..8).collect();
        let (colors, rounds) = speculative_distance2_coloring(&g, &order);
        assert_eq!(colors, vec![0; 8]);
        assert_eq!(rounds, 1);
    }

    #[test]
    fn star_resolves_all_conflicts() {
        let n = 5;
        let mut g = vec![Vec::new(); n];
        for leaf in 1..n {
            g[0].push(leaf);
            g[leaf].push(0);
        }
        let order: Vec<usize> = (0..n).collect();
        let (colors, rounds) = speculative_distance2_coloring(&g, &order);
        assert_eq!(count_colors(&colors), n);
        assert!(rounds <= n);
        assert!(colors.iter().all(|&c| c != UNCOLORED));
    }

    #[test]
    fn grid_is_colored_without_conflicts() {
        let g = grid(6, 7);
        let order: Vec<usize> = (0..g.len()).collect();
        let (colors, _) = speculative_distance2_coloring(&g, &order);
        for v in 0..g.len() {
            g.for_each_distance2(v, |w| assert_ne!(colors[v], colors[w], "{} and {}", v, w));
        }
    }
}
