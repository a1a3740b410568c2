//! Numerical derivative configuration.
//!
//! [`DerivativeCfg`] fields
//! ├ `initial_step` : first step is `initial_step * max(1, |x|)`
//! ├ `max_rows`     : central differences in row 0, each with half the previous step
//! ├ `abs_tol`      : absolute agreement required between final estimates
//! └ `rel_tol`      : relative agreement, scaled by the current estimate

use crate::differentiation::algorithms::MAX_ROWS_LIMIT;
use crate::differentiation::errors::DerivativeError;

pub const DEFAULT_INITIAL_STEP : f64   = 0.5;
pub const DEFAULT_MAX_ROWS     : usize = 8;
pub const DEFAULT_ABS_TOL      : f64   = 1e-13;
pub const DEFAULT_REL_TOL      : f64   = 1e-12;

/// Derivative configuration
///
/// # Validation
/// ├ `initial_step` > 0 and finite
/// ├ `max_rows`     in `1..=MAX_ROWS_LIMIT`
/// ├ `abs_tol`      >= 0 and finite
/// ├ `rel_tol`      >= 0 and finite
/// └ `abs_tol` and `rel_tol` not both 0
#[derive(Debug, Copy, Clone)]
pub struct DerivativeCfg {
    initial_step: f64,
    max_rows: usize,
    abs_tol: f64,
    rel_tol: f64,
}

impl DerivativeCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_step: DEFAULT_INITIAL_STEP,
            max_rows: DEFAULT_MAX_ROWS,
            abs_tol: DEFAULT_ABS_TOL,
            rel_tol: DEFAULT_REL_TOL,
        }
    }

    pub fn set_initial_step(mut self, v: f64) -> Result<Self, DerivativeError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(DerivativeError::InvalidInitialStep { got: v });
        }
        self.initial_step = v;
        Ok(self)
    }

    pub fn set_max_rows(mut self, v: usize) -> Result<Self, DerivativeError> {
        if v == 0 || v > MAX_ROWS_LIMIT {
            return Err(DerivativeError::InvalidMaxRows { got: v, limit: MAX_ROWS_LIMIT });
        }
        self.max_rows = v;
        Ok(self)
    }

    pub fn set_abs_tol(mut self, v: f64) -> Result<Self, DerivativeError> {
        if !v.is_finite() || v < 0.0 {
            return Err(DerivativeError::InvalidAbsTol { got: v });
        }
        if v == 0.0 && self.rel_tol == 0.0 {
            return Err(DerivativeError::InvalidAbsRelTol { abs_tol: v, rel_tol: self.rel_tol });
        }
        self.abs_tol = v;
        Ok(self)
    }

    pub fn set_rel_tol(mut self, v: f64) -> Result<Self, DerivativeError> {
        if !v.is_finite() || v < 0.0 {
            return Err(DerivativeError::InvalidRelTol { got: v });
        }
        if v == 0.0 && self.abs_tol == 0.0 {
            return Err(DerivativeError::InvalidAbsRelTol { abs_tol: self.abs_tol, rel_tol: v });
        }
        self.rel_tol = v;
        Ok(self)
    }

    // getters
    #[inline] #[must_use] pub fn initial_step(&self) -> f64 { self.initial_step }
    #[inline] #[must_use] pub fn max_rows(&self) -> usize { self.max_rows }
    #[inline] #[must_use] pub fn abs_tol(&self) -> f64 { self.abs_tol }
    #[inline] #[must_use] pub fn rel_tol(&self) -> f64 { self.rel_tol }

    /// First step for a derivative at `x`.
    #[inline]
    pub(crate) fn step_at(&self, x: f64) -> f64 {
        self.initial_step * x.abs().max(1.0)
    }

    #[inline]
    pub(crate) fn tolerance(&self, estimate: f64) -> f64 {
        self.abs_tol + self.rel_tol * estimate.abs()
    }
}

impl Default for DerivativeCfg {
    fn default() -> Self {
        Self::new()
    }
}
