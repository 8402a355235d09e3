use thiserror::Error;

// Unified error type for d2color

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
    #[error("invalid vertex ordering: {0}")]
    InvalidOrdering(String),
    #[error("invalid coloring: {0}")]
    InvalidColoring(String),
    #[error("distance-2 work estimate {work} exceeds the configured limit {limit}")]
    WorkLimitExceeded { work: u64, limit: u64 },
    #[error("{0} colors do not fit in an i32 color array")]
    ColorOverflow(usize),
    #[error("vertices {u} and {v} share color {color} within distance 2")]
    ConflictDetected { u: usize, v: usize, color: usize },
    #[error("thread pool error: {0}")]
    ThreadPool(String),
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}
