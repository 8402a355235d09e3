//! Vertex visitation orders for greedy coloring.
//!
//! Greedy coloring is correct for any order; the order only changes how many
//! colors are used and which ids come out. Every static order here is
//! deterministic: sorts are stable and start from index order, so ties always
//! resolve to the smaller vertex id.

use std::fmt;
use crate::core::traits::Adjacency;
use crate::error::ColoringError;

/// Policy for the order in which vertices receive colors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VertexOrdering {
    /// Index order `0, 1, ..., n-1`.
    Natural,
    /// Descending row degree.
    #[default]
    LargestFirst,
    /// Descending distance-2 degree estimate `deg(v) + Σ deg(u)` over
    /// off-diagonal neighbors `u`.
    Distance2LargestFirst,
    /// Dynamic: next vertex is the uncolored one with the most distinct colors
    /// within distance 2, then larger degree, then smaller index.
    Saturation,
    /// Caller-supplied permutation of `0..n`.
    Custom(Vec<usize>),
}

impl VertexOrdering {
    /// True for orders that are decided while coloring rather than up front.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, VertexOrdering::Saturation)
    }

    /// Materialize the visitation order for `g`.
    ///
    /// Fails with `InvalidOrdering` if a custom order is not a permutation and
    /// with `Unsupported` for the dynamic saturation order.
    pub fn order<G: Adjacency>(&self, g: &G) -> Result<Vec<usize>, ColoringError> {
        let n = g.n_vertices();
        match self {
            VertexOrdering::Natural => Ok((0..n).collect()),
            VertexOrdering::LargestFirst => Ok(sort_descending(n, |v| g.degree(v))),
            VertexOrdering::Distance2LargestFirst => Ok(sort_descending(n, |v| distance2_degree(g, v))),
            VertexOrdering::Saturation => Err(ColoringError::Unsupported(
                "saturation ordering has no static visitation order",
            )),
            VertexOrdering::Custom(order) => {
                validate_permutation(order, n)?;
                Ok(order.clone())
            }
        }
    }
}

impl fmt::Display for VertexOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VertexOrdering::Natural => "natural",
            VertexOrdering::LargestFirst => "largest-first",
            VertexOrdering::Distance2LargestFirst => "distance2-largest-first",
            VertexOrdering::Saturation => "saturation",
            VertexOrdering::Custom(_) => "custom",
        };
        f.write_str(name)
    }
}

fn sort_descending<K: Ord, F: Fn(usize) -> K>(n: usize, key: F) -> Vec<usize> {
    let keys: Vec<K> = (0..n).map(key).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| keys[b].cmp(&keys[a]));
    order
}

/// Upper bound on the size of the distance-2 neighborhood of `v`.
pub fn distance2_degree<G: Adjacency>(g: &G, v: usize) -> usize {
    g.neighbors(v)
        .iter()
        .filter(|&&u| u != v)
        .map(|&u| g.degree(u))
        .sum::<usize>()
        + g.degree(v)
}

/// Check that `order` lists each of `0..n` exactly once.
pub fn validate_permutation(order: &[usize], n: usize) -> Result<(), ColoringError> {
    if order.len() != n {
        return Err(ColoringError::InvalidOrdering(format!(
            "order has {} entries for {} vertices",
            order.len(),
            n
        )));
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n {
            return Err(ColoringError::InvalidOrdering(format!("vertex {} is out of range", v)));
        }
        if seen[v] {
            return Err(ColoringError::InvalidOrdering(format!("vertex {} appears twice", v)));
        }
        seen[v] = true;
    }
    Ok(())
}
