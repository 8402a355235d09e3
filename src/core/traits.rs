//! Core graph traits for d2color.

/// Read-only adjacency structure over vertices `0..n_vertices()`.
///
/// The coloring engine only ever sees a graph through this trait, so a CSR view,
/// an owned pattern and plain adjacency lists are interchangeable.
pub trait Adjacency {
    /// Number of vertices.
    fn n_vertices(&self) -> usize;

    /// Direct neighbors of `v`, in stored order. May contain `v` itself.
    fn neighbors(&self, v: usize) -> &[usize];

    /// Number of stored entries in row `v`.
    fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Total number of stored entries.
    fn nnz(&self) -> usize {
        (0..self.n_vertices()).map(|v| self.degree(v)).sum()
    }

    /// Largest row degree, 0 for an empty graph.
    fn max_degree(&self) -> usize {
        (0..self.n_vertices()).map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// Call `f(w)` for every `w != v` reachable from `v` in one or two hops.
    ///
    /// Vertices may be visited more than once; callers that need a set must
    /// deduplicate themselves.
    fn for_each_distance2<F: FnMut(usize)>(&self, v: usize, mut f: F) {
        for &u in self.neighbors(v) {
            if u != v {
                f(u);
            }
            for &w in self.neighbors(u) {
                if w != v {
                    f(w);
                }
            }
        }
    }
}

impl Adjacency for Vec<Vec<usize>> {
    fn n_vertices(&self) -> usize {
        self.len()
    }
    fn neighbors(&self, v: usize) -> &[usize] {
        &self[v]
    }
}
