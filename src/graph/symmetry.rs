//! Structural symmetry checks and symmetrization of sparsity patterns.
//!
//! Distance-2 coloring reads the pattern as an undirected graph. A one-directional
//! entry `(i, j)` without `(j, i)` hides `i` from `j`'s neighborhood, so an
//! asymmetric pattern can be colored "validly" from one side and still alias
//! from the other. Callers either guarantee symmetry or run [`symmetrize`] first.

use crate::core::traits::Adjacency;
use crate::graph::csr::CsrPattern;

/// Transposed pattern, rows sorted ascending, duplicates kept.
pub fn transpose<G: Adjacency>(g: &G) -> CsrPattern {
    let n = g.n_vertices();
    let mut counts = vec![0usize; n + 1];
    for i in 0..n {
        for &j in g.neighbors(i) {
            counts[j + 1] += 1;
        }
    }
    for j in 0..n {
        counts[j + 1] += counts[j];
    }
    let row_ptr = counts.clone();
    let mut next = counts;
    let mut col_idx = vec![0usize; row_ptr[n]];
    for i in 0..n {
        for &j in g.neighbors(i) {
            col_idx[next[j]] = i;
            next[j] += 1;
        }
    }
    CsrPattern::from_parts_unchecked(row_ptr, col_idx, n)
}

fn sorted_off_diagonal(row: &[usize], v: usize, out: &mut Vec<usize>) {
    out.clear();
    out.extend(row.iter().copied().filter(|&j| j != v));
    out.sort_unstable();
    out.dedup();
}

/// True when every off-diagonal entry `(i, j)` has a matching `(j, i)`.
pub fn is_symmetric<G: Adjacency>(g: &G) -> bool {
    first_asymmetric_entry(g).is_none()
}

/// Locate one entry `(i, j)` whose mirror `(j, i)` is missing.
pub fn first_asymmetric_entry<G: Adjacency>(g: &G) -> Option<(usize, usize)> {
    let gt = transpose(g);
    let mut row = Vec::new();
    let mut row_t = Vec::new();
    for i in 0..g.n_vertices() {
        sorted_off_diagonal(g.neighbors(i), i, &mut row);
        sorted_off_diagonal(gt.neighbors(i), i, &mut row_t);
        if row != row_t {
            // an entry of A missing from Aᵀ is (i, j) with no (j, i); otherwise
            // Aᵀ holds (i, j) because A holds (j, i) alone
            if let Some(&j) = row.iter().find(|j| row_t.binary_search(j).is_err()) {
                return Some((i, j));
            }
            if let Some(&j) = row_t.iter().find(|j| row.binary_search(j).is_err()) {
                return Some((j, i));
            }
        }
    }
    None
}

/// Pattern of `A ∪ Aᵀ` with sorted, de-duplicated rows. Diagonal entries of `A`
/// are kept.
pub fn symmetrize<G: Adjacency>(g: &G) -> CsrPattern {
    let n = g.n_vertices();
    let gt = transpose(g);
    let mut row_ptr = Vec::with_capacity(n + 1);
    row_ptr.push(0);
    let mut col_idx = Vec::with_capacity(2 * g.nnz());
    let mut row = Vec::new();
    for i in 0..n {
        row.clear();
        row.extend_from_slice(g.neighbors(i));
        row.extend_from_slice(gt.neighbors(i));
        row.sort_unstable();
        row.dedup();
        col_idx.extend_from_slice(&row);
        row_ptr.push(col_idx.len());
    }
    CsrPattern::from_parts_unchecked(row_ptr, col_idx, n)
}
