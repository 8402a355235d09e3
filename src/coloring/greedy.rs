//! Sequential greedy distance-2 coloring.
//! See Gebremedhin, Manne & Pothen, "What color is your Jacobian?" (SIAM Review, 2005), §3.

use crate::coloring::forbidden::{ForbiddenColors, UNCOLORED};
use crate::core::traits::Adjacency;

/// Greedy distance-2 coloring along `order`. Returns colors[i] = color assigned to node i.
///
/// Each vertex takes the smallest color not used by an already colored vertex
/// within two hops, so the result is distance-2 safe for any order and the ids
/// are dense. `order` must be a permutation of `0..g.n_vertices()`.
pub fn greedy_distance2_coloring<G: Adjacency>(g: &G, order: &[usize]) -> Vec<usize> {
    debug_assert_eq!(order.len(), g.n_vertices());
    let mut colors = vec![UNCOLORED; g.n_vertices()];
    let mut forbidden = ForbiddenColors::new();
    for &v in order {
        let c = forbidden.smallest_available(g, v, &colors);
        colors[v] = c;
    }
    colors
}

/// Number of colors in a dense coloring (max id + 1, 0 when empty).
pub fn count_colors(colors: &[usize]) -> usize {
    colors.iter().copied().max().map(|c| c + 1).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Vec<Vec<usize>> {
        (0..n)
            .map(|i| {
                let mut row = Vec::new();
                if i > 0 {
                    row.push(i - 1);
                }
                if i + 1 < n {
                    row.push(i + 1);
                }
                row
            })
            .collect()
    }

    #[test]
    fn path_in_natural_order_cycles_three_colors() {
        let g = path(6);
        let order: Vec<usize> = (0..6).collect();
        let colors = greedy_distance2_coloring(&g, &order);
        assert_eq!(colors, vec![0, 1, 2, 0, 1, 2]);
        assert_eq!(count_colors(&colors), 3);
    }

    #[test]
    fn diagonal_entries_do_not_block_own_color() {
        // 2x2 block with diagonal: 0 and 1 adjacent
        let g: Vec<Vec<usize>> = vec![vec![0, 1], vec![0, 1], vec![2]];
        let colors = greedy_distance2_coloring(&g, &[0, 1, 2]);
        assert_eq!(colors, vec![0, 1, 0]);
    }

    #[test]
    fn empty_graph_has_no_colors() {
        let g: Vec<Vec<usize>> = Vec::new();
        assert!(greedy_distance2_coloring(&g, &[]).is_empty());
        assert_eq!(count_colors(&[]), 0);
    }
}
