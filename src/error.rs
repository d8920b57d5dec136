use thiserror::Error;

/// Typed failure modes for every stage of the encode/solve/render pipeline.
#[derive(Debug, Error)]
pub enum SlitherlinkError {
    #[error("malformed puzzle: {0}")]
    Parse(String),

    /// Reserved for the indexer's invariant-violation class; the indexer
    /// itself panics on an out-of-range index rather than constructing this,
    /// since an out-of-range index there is always a caller bug, not a
    /// condition to recover from.
    #[error("internal indexer bug: {0}")]
    Bounds(String),

    #[error("no model satisfies the clues and the single-loop constraint")]
    NoSolution,

    #[error("more than one single-loop solution exists")]
    MultipleSolutions,

    #[error("SAT solver failure: {0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, SlitherlinkError>;
