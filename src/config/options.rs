//! API options for a coloring run.
//!
//! This module provides the `ColoringOptions` struct, which selects the vertex
//! ordering and strategy of the distance-2 coloring engine, the optional input
//! and output checks, and the guards against very dense patterns (a degree
//! threshold that logs a warning and a hard ceiling on distance-2 work).

use std::fmt;
use bitflags::bitflags;
use crate::coloring::{Strategy, VertexOrdering};

bitflags! {
    /// Optional checks performed around a coloring run.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct CheckFlags: u32 {
        /// Reject patterns with an entry `(i, j)` but no `(j, i)`.
        const SYMMETRY        = 0b0001;
        /// Reject rows whose column indices are not strictly increasing.
        const SORTED_ROWS     = 0b0010;
        /// Re-check distance-2 safety of the finished coloring.
        const VERIFY_COLORING = 0b0100;
        const ALL             = Self::SYMMETRY.bits() | Self::SORTED_ROWS.bits() | Self::VERIFY_COLORING.bits();
    }
}

/// `SYMMETRY` only.
impl Default for CheckFlags {
    fn default() -> Self {
        CheckFlags::SYMMETRY
    }
}

/// Default maximum row degree before a warning is logged.
pub const DEFAULT_DEGREE_WARNING: usize = 1024;

/// Coloring strategy & parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringOptions {
    /// Order in which vertices are colored.
    pub ordering: VertexOrdering,

    /// Sequential greedy or speculative parallel coloring.
    pub strategy: Strategy,

    /// Input/output checks to run. Defaults to `CheckFlags::SYMMETRY`; clear it
    /// with `with_checks(CheckFlags::empty())` when the caller guarantees a
    /// symmetric pattern.
    pub checks: CheckFlags,

    /// Row degree above which a warning is logged.
    pub degree_warning: usize,

    /// Hard ceiling on the distance-2 work estimate, if any.
    pub max_work: Option<u64>,

    /// Thread count for the speculative strategy (`None`: global rayon pool,
    /// `Some(0)`: one thread per CPU).
    pub num_threads: Option<usize>,
}

impl Default for ColoringOptions {
    fn default() -> Self {
        Self {
            ordering: VertexOrdering::LargestFirst,
            strategy: Strategy::Sequential,
            checks: CheckFlags::default(),
            degree_warning: DEFAULT_DEGREE_WARNING,
            max_work: None,
            num_threads: None,
        }
    }
}

impl ColoringOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_ordering(mut self, ordering: VertexOrdering) -> Self {
        self.ordering = ordering;
        self
    }
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
    pub fn with_checks(mut self, checks: CheckFlags) -> Self {
        self.checks = checks;
        self
    }
    pub fn with_degree_warning(mut self, degree: usize) -> Self {
        self.degree_warning = degree;
        self
    }
    pub fn with_max_work(mut self, limit: u64) -> Self {
        self.max_work = Some(limit);
        self
    }
    pub fn with_num_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }
}

impl fmt::Display for ColoringOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Coloring(ordering={}, strategy={:?}, checks={:?}, degree_warning={}, max_work={:?}, num_threads={:?})",
            self.ordering, self.strategy, self.checks, self.degree_warning, self.max_work, self.num_threads
        )
    }
}
