// CSR graph view (borrowed) and CSR pattern (owned)

use crate::core::traits::Adjacency;
use crate::error::ColoringError;
use faer::sparse::SymbolicSparseRowMatRef;

/// Check a CSR triple over `n` vertices.
///
/// Verifies the `row_ptr` length, `row_ptr[0] == 0`, monotonicity, that the last
/// offset equals `col_idx.len()`, and that every column index is in `[0, n)`.
pub fn validate_csr(row_ptr: &[usize], col_idx: &[usize], n: usize) -> Result<(), ColoringError> {
    if row_ptr.len().checked_sub(1) != Some(n) {
        return Err(ColoringError::InvalidGraph(format!(
            "row_ptr has length {}, expected n_dofs + 1 for n_dofs = {}",
            row_ptr.len(),
            n
        )));
    }
    if row_ptr[0] != 0 {
        return Err(ColoringError::InvalidGraph(format!("row_ptr[0] is {}, expected 0", row_ptr[0])));
    }
    if let Some(i) = row_ptr.windows(2).position(|w| w[1] < w[0]) {
        return Err(ColoringError::InvalidGraph(format!(
            "row_ptr decreases at row {}: {} > {}",
            i,
            row_ptr[i],
            row_ptr[i + 1]
        )));
    }
    if row_ptr[n] != col_idx.len() {
        return Err(ColoringError::InvalidGraph(format!(
            "row_ptr[n_dofs] is {}, but col_idx has {} entries",
            row_ptr[n],
            col_idx.len()
        )));
    }
    if let Some(k) = col_idx.iter().position(|&j| j >= n) {
        return Err(ColoringError::InvalidGraph(format!(
            "col_idx[{}] = {} is out of range for {} vertices",
            k, col_idx[k], n
        )));
    }
    Ok(())
}

/// Check that every neighbor index of `g` names a vertex in `0..n_vertices()`.
pub fn validate_neighbors<G: Adjacency>(g: &G) -> Result<(), ColoringError> {
    let n = g.n_vertices();
    for i in 0..n {
        if let Some(&j) = g.neighbors(i).iter().find(|&&j| j >= n) {
            return Err(ColoringError::InvalidGraph(format!(
                "row {} lists neighbor {}, out of range for {} vertices",
                i, j, n
            )));
        }
    }
    Ok(())
}

/// True when every row lists strictly increasing column indices.
pub fn has_sorted_rows<G: Adjacency>(g: &G) -> bool {
    (0..g.n_vertices()).all(|i| g.neighbors(i).windows(2).all(|w| w[0] < w[1]))
}

/// Zero-copy adjacency view over caller-owned CSR arrays.
#[derive(Debug, Clone, Copy)]
pub struct CsrGraph<'a> {
    n: usize,
    row_ptr: &'a [usize],
    col_idx: &'a [usize],
}

impl<'a> CsrGraph<'a> {
    /// Wrap `(row_ptr, col_idx)` as a graph on `n` vertices after validating it.
    pub fn new(row_ptr: &'a [usize], col_idx: &'a [usize], n: usize) -> Result<Self, ColoringError> {
        validate_csr(row_ptr, col_idx, n)?;
        Ok(Self { n, row_ptr, col_idx })
    }

    /// View the pattern of a square faer symbolic CSR matrix.
    ///
    /// Only compact storage is accepted; a matrix carrying explicit `row_nnz`
    /// has gaps between rows that a plain CSR view cannot express.
    pub fn from_faer(mat: SymbolicSparseRowMatRef<'a, usize>) -> Result<Self, ColoringError> {
        let (nrows, ncols) = (mat.nrows(), mat.ncols());
        if nrows != ncols {
            return Err(ColoringError::InvalidGraph(format!(
                "sparsity pattern must be square, got {}x{}",
                nrows, ncols
            )));
        }
        if mat.row_nnz().is_some() {
            return Err(ColoringError::InvalidGraph(
                "non-compact CSR storage (explicit row_nnz) is not supported".to_string(),
            ));
        }
        Self::new(mat.row_ptr(), mat.col_idx(), nrows)
    }

    pub fn row_ptr(&self) -> &'a [usize] {
        self.row_ptr
    }

    pub fn col_idx(&self) -> &'a [usize] {
        self.col_idx
    }
}

impl Adjacency for CsrGraph<'_> {
    fn n_vertices(&self) -> usize {
        self.n
    }
    fn neighbors(&self, v: usize) -> &[usize] {
        &self.col_idx[self.row_ptr[v]..self.row_ptr[v + 1]]
    }
    fn degree(&self, v: usize) -> usize {
        self.row_ptr[v + 1] - self.row_ptr[v]
    }
    fn nnz(&self) -> usize {
        self.col_idx.len()
    }
}

/// Owned CSR sparsity pattern.
///
/// Used when the caller's buffers cannot be viewed directly (e.g. `i64` host
/// arrays) or when a new pattern is derived, such as a symmetrized one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrPattern {
    n: usize,
    row_ptr: Vec<usize>,
    col_idx: Vec<usize>,
}

impl CsrPattern {
    /// Build from owned CSR arrays; validated like [`CsrGraph::new`].
    pub fn from_csr(row_ptr: Vec<usize>, col_idx: Vec<usize>, n: usize) -> Result<Self, ColoringError> {
        validate_csr(&row_ptr, &col_idx, n)?;
        Ok(Self { n, row_ptr, col_idx })
    }

    /// Arrays produced inside the crate from an already-validated pattern.
    pub(crate) fn from_parts_unchecked(row_ptr: Vec<usize>, col_idx: Vec<usize>, n: usize) -> Self {
        debug_assert!(validate_csr(&row_ptr, &col_idx, n).is_ok());
        Self { n, row_ptr, col_idx }
    }

    /// Convert `i64` CSR buffers, rejecting negative or out-of-range values.
    pub fn from_i64(row_ptr: &[i64], col_idx: &[i64], n_dofs: i64) -> Result<Self, ColoringError> {
        let n = usize::try_from(n_dofs)
            .map_err(|_| ColoringError::InvalidGraph(format!("n_dofs must be non-negative, got {}", n_dofs)))?;
        if row_ptr.len().checked_sub(1) != Some(n) {
            return Err(ColoringError::InvalidGraph(format!(
                "row_ptr has length {}, expected n_dofs + 1 for n_dofs = {}",
                row_ptr.len(),
                n
            )));
        }
        let row_ptr = row_ptr
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                usize::try_from(p)
                    .map_err(|_| ColoringError::InvalidGraph(format!("row_ptr[{}] = {} is negative", i, p)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let col_idx = col_idx
            .iter()
            .enumerate()
            .map(|(k, &j)| {
                usize::try_from(j).map_err(|_| {
                    ColoringError::InvalidGraph(format!("col_idx[{}] = {} is out of range for {} vertices", k, j, n))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_csr(row_ptr, col_idx, n)
    }

    /// Pack adjacency lists into CSR; every entry must be `< adj.len()`.
    pub fn from_adjacency(adj: &[Vec<usize>]) -> Result<Self, ColoringError> {
        let n = adj.len();
        let mut row_ptr = Vec::with_capacity(n + 1);
        row_ptr.push(0);
        let mut col_idx = Vec::with_capacity(adj.iter().map(Vec::len).sum());
        for row in adj {
            col_idx.extend_from_slice(row);
            row_ptr.push(col_idx.len());
        }
        Self::from_csr(row_ptr, col_idx, n)
    }

    pub fn as_graph(&self) -> CsrGraph<'_> {
        CsrGraph { n: self.n, row_ptr: &self.row_ptr, col_idx: &self.col_idx }
    }

    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    pub fn col_idx(&self) -> &[usize] {
        &self.col_idx
    }

    /// Consume into `(row_ptr, col_idx, n)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, usize) {
        (self.row_ptr, self.col_idx, self.n)
    }
}

impl Adjacency for CsrPattern {
    fn n_vertices(&self) -> usize {
        self.n
    }
    fn neighbors(&self, v: usize) -> &[usize] {
        &self.col_idx[self.row_ptr[v]..self.row_ptr[v + 1]]
    }
    fn nnz(&self) -> usize {
        self.col_idx.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faer::sparse::SymbolicSparseRowMat;

    #[test]
    fn neighbor_range_check_on_adjacency_lists() {
        let ok: Vec<Vec<usize>> = vec![vec![1], vec![0]];
        assert!(validate_neighbors(&ok).is_ok());
        let bad: Vec<Vec<usize>> = vec![vec![5], vec![]];
        match validate_neighbors(&bad) {
            Err(ColoringError::InvalidGraph(msg)) => assert!(msg.contains("neighbor 5")),
            other => panic!("expected InvalidGraph, got {:?}", other),
        }
    }

    #[test]
    fn view_exposes_rows() {
        // path 0-1-2
        let row_ptr = [0, 1, 3, 4];
        let col_idx = [1, 0, 2, 1];
        let g = CsrGraph::new(&row_ptr, &col_idx, 3).unwrap();
        assert_eq!(g.n_vertices(), 3);
        assert_eq!(g.neighbors(1), &[0, 2]);
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.max_degree(), 2);
        assert_eq!(g.nnz(), 4);
        assert!(has_sorted_rows(&g));
        let unsorted = CsrGraph::new(&[0, 2, 2], &[1, 0], 2).unwrap();
        assert!(!has_sorted_rows(&unsorted));
    }

    #[test]
    fn rejects_malformed_csr() {
        let bad_len = CsrGraph::new(&[0, 1], &[0], 2);
        assert!(matches!(bad_len, Err(ColoringError::InvalidGraph(_))));

        let bad_start = CsrGraph::new(&[1, 1], &[], 1);
        assert!(matches!(bad_start, Err(ColoringError::InvalidGraph(_))));

        let decreasing = CsrGraph::new(&[0, 2, 1, 2], &[1, 2], 3);
        assert!(matches!(decreasing, Err(ColoringError::InvalidGraph(_))));

        let short_cols = CsrGraph::new(&[0, 1, 2], &[1], 2);
        assert!(matches!(short_cols, Err(ColoringError::InvalidGraph(_))));

        let out_of_range = CsrGraph::new(&[0, 1, 2], &[1, 2], 2);
        assert!(matches!(out_of_range, Err(ColoringError::InvalidGraph(_))));
    }

    #[test]
    fn i64_conversion_checks_signs() {
        let p = CsrPattern::from_i64(&[0, 1, 2], &[1, 0], 2).unwrap();
        assert_eq!(p.neighbors(0), &[1]);

        assert!(CsrPattern::from_i64(&[0], &[], -1).is_err());
        assert!(CsrPattern::from_i64(&[0, -1, 2], &[1, 0], 2).is_err());
        assert!(CsrPattern::from_i64(&[0, 1, 2], &[1, -3], 2).is_err());
        assert!(CsrPattern::from_i64(&[0, 1], &[0], 2).is_err());
    }

    #[test]
    fn empty_pattern_is_valid() {
        let p = CsrPattern::from_i64(&[0], &[], 0).unwrap();
        assert_eq!(p.n_vertices(), 0);
        assert_eq!(p.max_degree(), 0);
    }

    #[test]
    fn adjacency_round_trip_preserves_rows() {
        let adj = vec![vec![1, 2], vec![0], vec![0]];
        let p = CsrPattern::from_adjacency(&adj).unwrap();
        assert_eq!(p.row_ptr(), &[0, 2, 3, 4]);
        assert_eq!(p.as_graph().neighbors(0), &[1, 2]);
        assert!(CsrPattern::from_adjacency(&[vec![3]]).is_err());
    }

    #[test]
    fn faer_symbolic_view() {
        let sym = SymbolicSparseRowMat::new_checked(3, 3, vec![0, 1, 3, 4], None, vec![1, 0, 2, 1]);
        let g = CsrGraph::from_faer(sym.as_ref()).unwrap();
        assert_eq!(g.neighbors(1), &[0, 2]);

        let rect = SymbolicSparseRowMat::new_checked(2, 3, vec![0, 1, 2], None, vec![2, 0]);
        assert!(CsrGraph::from_faer(rect.as_ref()).is_err());
    }
}
