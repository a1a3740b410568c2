//! Batch interpolation configuration shared by every interpolant.
//!
//! [`CommonCfg`] holds borrowed sample data plus the query points:
//! - `x`             : abscissae, any order (sorted later by [`crate::interpolation::SampleSet`])
//! - `y`             : ordinates paired with `x`
//! - `x_eval`        : query points, may lie outside the sample range
//! - `x_min_spacing` : smallest allowed gap between adjacent sorted `x`
//!
//! Each check runs when its field is set, so a fully built config only
//! needs [`CommonCfg::validate`] to confirm nothing was left out.

use crate::interpolation::errors::InterpolationError;

/// Default for `x_min_spacing`.
pub const DEFAULT_X_TOL: f64 = 1e-12;

#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    x: &'a [f64],
    y: &'a [f64],
    x_eval: &'a [f64],
    x_min_spacing: f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self { x: &[], y: &[], x_eval: &[], x_min_spacing: DEFAULT_X_TOL }
    }

    /// Confirms both sample slices were supplied and agree in length.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        if self.x.is_empty() || self.y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        paired_lengths(self.x.len(), self.y.len())?;
        if self.x.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: self.x.len() });
        }
        Ok(())
    }

    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }

    pub(crate) fn try_x(&mut self, v: &'a [f64]) -> Result<(), InterpolationError> {
        finite_samples(v)?;
        if v.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: v.len() });
        }
        if !self.y.is_empty() {
            paired_lengths(v.len(), self.y.len())?;
        }
        self.x = v;
        Ok(())
    }

    pub(crate) fn try_y(&mut self, v: &'a [f64]) -> Result<(), InterpolationError> {
        finite_samples(v)?;
        if !self.x.is_empty() {
            paired_lengths(self.x.len(), v.len())?;
        }
        self.y = v;
        Ok(())
    }

    pub(crate) fn try_x_eval(&mut self, v: &'a [f64]) -> Result<(), InterpolationError> {
        match non_finite_idx(v) {
            Some(idx) => Err(InterpolationError::NonFiniteVec { idx }),
            None => {
                self.x_eval = v;
                Ok(())
            }
        }
    }

    pub(crate) fn try_x_min_spacing(&mut self, v: f64) -> Result<(), InterpolationError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: v });
        }
        self.x_min_spacing = v;
        Ok(())
    }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the first NaN/inf element.
pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

fn finite_samples(v: &[f64]) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    match non_finite_idx(v) {
        Some(idx) => Err(InterpolationError::NonFiniteVec { idx }),
        None => Ok(()),
    }
}

#[inline]
fn paired_lengths(x_len: usize, y_len: usize) -> Result<(), InterpolationError> {
    if x_len != y_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len });
    }
    Ok(())
}

/// Adds the consuming `set_*` builders for a config with a `common` field.
macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(mut self, v: &'a [f64])
                -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.try_x(v)?;
                Ok(self)
            }

            pub fn set_y(mut self, v: &'a [f64])
                -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.try_y(v)?;
                Ok(self)
            }

            pub fn set_x_eval(mut self, v: &'a [f64])
                -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.try_x_eval(v)?;
                Ok(self)
            }

            pub fn set_x_tol(mut self, v: f64)
                -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.try_x_min_spacing(v)?;
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
