//! Brent root-finding configuration.
//!
//! [`BrentCfg`] fields
//! ├ `abs_fx`   : stop once `|f(x)| <= abs_fx`
//! ├ `abs_x`    : absolute part of the bracket-width tolerance
//! ├ `rel_x`    : relative part, scaled by `max(|a|, |b|, 1)`
//! └ `max_iter` : iteration cap; when unset it is resolved from the bracket

use crate::root_finding::errors::RootFindingError;

pub const DEFAULT_ABS_FX : f64 = 1e-15;
pub const DEFAULT_ABS_X  : f64 = 0.0;
pub const DEFAULT_REL_X  : f64 = 4.0 * f64::EPSILON;

/// Brent configuration
///
/// # Construction
/// - Use [`BrentCfg::new`] then optional setters.
///
/// # Validation
/// ├ `abs_fx`   > 0 and finite
/// ├ `abs_x`    >= 0 and finite
/// ├ `rel_x`    >= 0 and finite
/// ├ `abs_x` and `rel_x` not both 0
/// └ `max_iter` >= 1
#[derive(Debug, Copy, Clone)]
pub struct BrentCfg {
    abs_fx: f64,
    abs_x: f64,
    rel_x: f64,
    max_iter: Option<usize>,
}

impl BrentCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            abs_fx: DEFAULT_ABS_FX,
            abs_x: DEFAULT_ABS_X,
            rel_x: DEFAULT_REL_X,
            max_iter: None,
        }
    }

    pub fn set_abs_fx(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(RootFindingError::InvalidAbsFx { got: v });
        }
        self.abs_fx = v;
        Ok(self)
    }

    pub fn set_abs_x(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v < 0.0 {
            return Err(RootFindingError::InvalidAbsX { got: v });
        }
        if v == 0.0 && self.rel_x == 0.0 {
            return Err(RootFindingError::InvalidAbsRelX { abs_x: v, rel_x: self.rel_x });
        }
        self.abs_x = v;
        Ok(self)
    }

    pub fn set_rel_x(mut self, v: f64) -> Result<Self, RootFindingError> {
        if !v.is_finite() || v < 0.0 {
            return Err(RootFindingError::InvalidRelX { got: v });
        }
        if v == 0.0 && self.abs_x == 0.0 {
            return Err(RootFindingError::InvalidAbsRelX { abs_x: self.abs_x, rel_x: v });
        }
        self.rel_x = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = Some(v);
        Ok(self)
    }

    // getters
    #[inline] #[must_use] pub fn abs_fx(&self) -> f64 { self.abs_fx }
    #[inline] #[must_use] pub fn abs_x(&self) -> f64 { self.abs_x }
    #[inline] #[must_use] pub fn rel_x(&self) -> f64 { self.rel_x }
    #[inline] #[must_use] pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    /// Bracket-width tolerance `abs_x + rel_x * max(|a|, |b|, 1)`.
    #[inline]
    pub(crate) fn width_tol(&self, a: f64, b: f64) -> f64 {
        self.abs_x + self.rel_x * a.abs().max(b.abs()).max(1.0)
    }
}

impl Default for BrentCfg {
    fn default() -> Self {
        Self::new()
    }
}
