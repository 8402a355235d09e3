//! Saturation-ordered (DSATUR-style) distance-2 coloring.
//!
//! The next vertex to color is the uncolored one whose distance-2 neighborhood
//! already shows the most distinct colors; ties go to the larger row degree and
//! then to the smaller index. The candidate queue is a max-heap with lazy
//! deletion: an entry is skipped when its vertex is colored or its saturation
//! has grown since the entry was pushed.
//!
//! Tracking distinct colors costs one hash set per vertex, so memory grows with
//! the total distance-2 neighborhood size rather than with `n` alone.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use ahash::AHashSet;
use crate::coloring::forbidden::{ForbiddenColors, UNCOLORED};
use crate::core::traits::Adjacency;

/// Distance-2 coloring in dynamic saturation order.
pub fn saturation_distance2_coloring<G: Adjacency>(g: &G) -> Vec<usize> {
    let n = g.n_vertices();
    let mut colors = vec![UNCOLORED; n];
    let mut seen: Vec<AHashSet<usize>> = vec![AHashSet::new(); n];
    let mut heap: BinaryHeap<(usize, usize, Reverse<usize>)> =
        (0..n).map(|v| (0, g.degree(v), Reverse(v))).collect();
    let mut forbidden = ForbiddenColors::new();

    while let Some((sat, _, Reverse(v))) = heap.pop() {
        if colors[v] != UNCOLORED || sat != seen[v].len() {
            continue;
        }
        let c = forbidden.smallest_available(g, v, &colors);
        colors[v] = c;
        seen[v] = AHashSet::new();

        g.for_each_distance2(v, |w| {
            if colors[w] == UNCOLORED && seen[w].insert(c) {
                heap.push((seen[w].len(), g.degree(w), Reverse(w)));
            }
        });
    }
    colors
}
