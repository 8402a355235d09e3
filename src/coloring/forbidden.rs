// Forbidden-color marker array shared by the greedy engines

use crate::core::traits::Adjacency;

/// Sentinel for a vertex that has no color yet.
pub const UNCOLORED: usize = usize::MAX;

/// Colors forbidden for the vertex currently being colored.
///
/// `mark[c] == stamp` means color `c` is taken. Bumping the stamp clears every
/// mark at once, so a query costs only the colors it touches.
#[derive(Debug, Default)]
pub(crate) struct ForbiddenColors {
    mark: Vec<usize>,
    stamp: usize,
}

impl ForbiddenColors {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.stamp += 1;
    }

    fn forbid(&mut self, color: usize) {
        if color >= self.mark.len() {
            self.mark.resize(color + 1, 0);
        }
        self.mark[color] = self.stamp;
    }

    fn smallest_free(&self) -> usize {
        self.mark
            .iter()
            .position(|&m| m != self.stamp)
            .unwrap_or(self.mark.len())
    }

    /// Smallest color not used by any colored vertex within distance 2 of `v`.
    pub(crate) fn smallest_available<G: Adjacency>(&mut self, g: &G, v: usize, colors: &[usize]) -> usize {
        self.reset();
        g.for_each_distance2(v, |w| {
            let c = colors[w];
            if c != UNCOLORED {
                self.forbid(c);
            }
        });
        self.smallest_free()
    }
}
