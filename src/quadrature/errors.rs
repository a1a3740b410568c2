//! Quadrature error types.
//!
//! ┌ [`QuadratureError::InfiniteBounds`]      : unsupported infinite interval
//! ├ [`QuadratureError::NonFiniteEvaluation`] : integrand produced NaN/inf
//! └ configuration errors                     : row count and tolerances

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuadratureError {
    #[error("infinite integration bounds are not supported: got [{a}, {b}]")]
    InfiniteBounds { a: f64, b: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_rows: must be in 1..={limit}. got {got}")]
    InvalidMaxRows { got: usize, limit: usize },

    #[error("invalid `abs_tol` tolerance: must be finite and >= 0. got {got}")]
    InvalidAbsTol { got: f64 },

    #[error("invalid `rel_tol` tolerance: must be finite and >= 0. got {got}")]
    InvalidRelTol { got: f64 },

    #[error("either `abs_tol` or `rel_tol` must be > 0. got {abs_tol} and {rel_tol}")]
    InvalidAbsRelTol { abs_tol: f64, rel_tol: f64 },
}
