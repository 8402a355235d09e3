//! Graph module: CSR views of sparsity patterns and symmetry utilities.

pub mod csr;
pub use csr::{CsrGraph, CsrPattern, has_sorted_rows, validate_csr, validate_neighbors};
pub mod symmetry;
pub use symmetry::{first_asymmetric_entry, is_symmetric, symmetrize, transpose};
