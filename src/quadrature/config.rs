//! Romberg quadrature configuration.
//!
//! [`RombergCfg`] fields
//! ├ `max_rows` : rows of the Richardson triangle (row 0 uses `2^(max_rows-1)` segments)
//! ├ `abs_tol`  : absolute agreement required between final estimates
//! └ `rel_tol`  : relative agreement, scaled by the current estimate
//!
//! Convergence is declared when `|Δ| <= abs_tol + rel_tol * |estimate|`.

use crate::quadrature::algorithms::MAX_ROWS_LIMIT;
use crate::quadrature::errors::QuadratureError;

pub const DEFAULT_MAX_ROWS : usize = 10;
pub const DEFAULT_ABS_TOL  : f64   = 1e-16;
pub const DEFAULT_REL_TOL  : f64   = 1e-12;

/// Romberg configuration
///
/// # Construction
/// - Use [`RombergCfg::new`] then optional setters.
///
/// # Validation
/// Setters reject bad values eagerly:
/// ├ `max_rows` in `1..=MAX_ROWS_LIMIT`
/// ├ `abs_tol`  >= 0 and finite
/// ├ `rel_tol`  >= 0 and finite
/// └ `abs_tol` and `rel_tol` not both 0
#[derive(Debug, Copy, Clone)]
pub struct RombergCfg {
    max_rows: usize,
    abs_tol: f64,
    rel_tol: f64,
}

impl RombergCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            abs_tol: DEFAULT_ABS_TOL,
            rel_tol: DEFAULT_REL_TOL,
        }
    }

    pub fn set_max_rows(mut self, v: usize) -> Result<Self, QuadratureError> {
        if v == 0 || v > MAX_ROWS_LIMIT {
            return Err(QuadratureError::InvalidMaxRows { got: v, limit: MAX_ROWS_LIMIT });
        }
        self.max_rows = v;
        Ok(self)
    }

    pub fn set_abs_tol(mut self, v: f64) -> Result<Self, QuadratureError> {
        if !v.is_finite() || v < 0.0 {
            return Err(QuadratureError::InvalidAbsTol { got: v });
        }
        if v == 0.0 && self.rel_tol == 0.0 {
            return Err(QuadratureError::InvalidAbsRelTol { abs_tol: v, rel_tol: self.rel_tol });
        }
        self.abs_tol = v;
        Ok(self)
    }

    pub fn set_rel_tol(mut self, v: f64) -> Result<Self, QuadratureError> {
        if !v.is_finite() || v < 0.0 {
            return Err(QuadratureError::InvalidRelTol { got: v });
        }
        if v == 0.0 && self.abs_tol == 0.0 {
            return Err(QuadratureError::InvalidAbsRelTol { abs_tol: self.abs_tol, rel_tol: v });
        }
        self.rel_tol = v;
        Ok(self)
    }

    // getters
    #[inline] #[must_use] pub fn max_rows(&self) -> usize { self.max_rows }
    #[inline] #[must_use] pub fn abs_tol(&self) -> f64 { self.abs_tol }
    #[inline] #[must_use] pub fn rel_tol(&self) -> f64 { self.rel_tol }

    /// Agreement threshold for the current estimate.
    #[inline]
    pub(crate) fn tolerance(&self, estimate: f64) -> f64 {
        self.abs_tol + self.rel_tol * estimate.abs()
    }
}

impl Default for RombergCfg {
    fn default() -> Self {
        Self::new()
    }
}
