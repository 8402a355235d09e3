//! Post-hoc checks of color assignments.

use crate::coloring::forbidden::UNCOLORED;
use crate::core::traits::Adjacency;
use crate::error::ColoringError;

/// First pair `(u, v, color)` with `u < v` sharing a color within distance 2.
pub fn find_distance2_conflict<G: Adjacency>(g: &G, colors: &[usize]) -> Option<(usize, usize, usize)> {
    for v in 0..g.n_vertices() {
        let c = colors[v];
        let mut hit = None;
        g.for_each_distance2(v, |w| {
            if hit.is_none() && colors[w] == c {
                hit = Some(w);
            }
        });
        if let Some(w) = hit {
            return Some((v.min(w), v.max(w), c));
        }
    }
    None
}

/// True when the used ids are exactly `0..num_colors`.
pub fn is_dense(colors: &[usize], num_colors: usize) -> bool {
    let mut used = vec![false; num_colors];
    for &c in colors {
        if c >= num_colors {
            return false;
        }
        used[c] = true;
    }
    used.into_iter().all(|u| u)
}

/// Check totality, density and distance-2 safety of `colors` on `g`.
pub fn verify_distance2_coloring<G: Adjacency>(
    g: &G,
    colors: &[usize],
    num_colors: usize,
) -> Result<(), ColoringError> {
    if colors.len() != g.n_vertices() {
        return Err(ColoringError::InvalidColoring(format!(
            "{} colors for {} vertices",
            colors.len(),
            g.n_vertices()
        )));
    }
    if let Some(v) = colors.iter().position(|&c| c == UNCOLORED) {
        return Err(ColoringError::InvalidColoring(format!("vertex {} has no color", v)));
    }
    if !is_dense(colors, num_colors) {
        return Err(ColoringError::InvalidColoring(format!(
            "color ids are not exactly 0..{}",
            num_colors
        )));
    }
    match find_distance2_conflict(g, colors) {
        Some((u, v, color)) => Err(ColoringError::ConflictDetected { u, v, color }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path4() -> Vec<Vec<usize>> {
        vec![vec![1], vec![0, 2], vec![1, 3], vec![2]]
    }

    #[test]
    fn accepts_valid_path_coloring() {
        assert!(verify_distance2_coloring(&path4(), &[0, 1, 2, 0], 3).is_ok());
    }

    #[test]
    fn reports_distance_two_conflict() {
        let err = verify_distance2_coloring(&path4(), &[0, 1, 0, 2], 3).unwrap_err();
        assert_eq!(err, ColoringError::ConflictDetected { u: 0, v: 2, color: 0 });
    }

    #[test]
    fn rejects_gaps_and_missing_colors() {
        assert!(!is_dense(&[0, 2], 3));
        assert!(matches!(
            verify_distance2_coloring(&path4(), &[0, 1, 3, 0], 4),
            Err(ColoringError::InvalidColoring(_))
        ));
        assert!(matches!(
            verify_distance2_coloring(&path4(), &[0, 1, UNCOLORED, 0], 3),
            Err(ColoringError::InvalidColoring(_))
        ));
        assert!(matches!(
            verify_distance2_coloring(&path4(), &[0, 1], 2),
            Err(ColoringError::InvalidColoring(_))
        ));
    }
}
