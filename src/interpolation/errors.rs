//! Interpolation error types.
//!
//! ┌ construction input : empty, unequal length, non-finite, too few samples
//! ├ sample spacing     : duplicate abscissae that would give zero-width segments
//! ├ linear solve       : zero or non-finite pivot in the tridiagonal system
//! └ evaluation         : non-finite query point

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("singular tridiagonal system: zero or non-finite pivot at row {row}")]
    SingularSystem { row: usize },

    #[error("non-finite query point x={x}")]
    NonFiniteQuery { x: f64 },
}
