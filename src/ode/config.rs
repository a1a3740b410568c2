//! Adaptive Cash-Karp configuration.
//!
//! [`CashKarpCfg`] fields
//! ├ `initial_step` : first step size tried
//! ├ `safety`       : factor applied to every step-size update
//! ├ `max_growth`   : `h' / h` after a step with exactly zero error
//! ├ `min_step`     : step sizes at or below this end the run
//! └ `max_steps`    : cap on attempted (accepted + rejected) steps

use crate::ode::errors::OdeError;

pub const DEFAULT_INITIAL_STEP : f64   = 0.01;
pub const DEFAULT_SAFETY       : f64   = 0.99;
pub const DEFAULT_MAX_GROWTH   : f64   = 5.0;
pub const DEFAULT_MIN_STEP     : f64   = 1e-14;
pub const DEFAULT_MAX_STEPS    : usize = 100_000;

/// Cash-Karp configuration
///
/// # Construction
/// - Use [`CashKarpCfg::new`] then optional setters.
///
/// # Validation
/// Setters reject bad values eagerly:
/// ├ `initial_step` > 0 and finite
/// ├ `safety`       in (0, 1]
/// ├ `max_growth`   > 1 and finite
/// ├ `min_step`     >= 0 and finite
/// └ `max_steps`    >= 1
#[derive(Debug, Copy, Clone)]
pub struct CashKarpCfg {
    initial_step: f64,
    safety: f64,
    max_growth: f64,
    min_step: f64,
    max_steps: usize,
}

impl CashKarpCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            initial_step: DEFAULT_INITIAL_STEP,
            safety: DEFAULT_SAFETY,
            max_growth: DEFAULT_MAX_GROWTH,
            min_step: DEFAULT_MIN_STEP,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn set_initial_step(mut self, v: f64) -> Result<Self, OdeError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(OdeError::InvalidInitialStep { got: v });
        }
        self.initial_step = v;
        Ok(self)
    }

    pub fn set_safety(mut self, v: f64) -> Result<Self, OdeError> {
        if !(v > 0.0 && v <= 1.0) {
            return Err(OdeError::InvalidSafety { got: v });
        }
        self.safety = v;
        Ok(self)
    }

    pub fn set_max_growth(mut self, v: f64) -> Result<Self, OdeError> {
        if !v.is_finite() || v <= 1.0 {
            return Err(OdeError::InvalidMaxGrowth { got: v });
        }
        self.max_growth = v;
        Ok(self)
    }

    pub fn set_min_step(mut self, v: f64) -> Result<Self, OdeError> {
        if !v.is_finite() || v < 0.0 {
            return Err(OdeError::InvalidMinStep { got: v });
        }
        self.min_step = v;
        Ok(self)
    }

    pub fn set_max_steps(mut self, v: usize) -> Result<Self, OdeError> {
        if v == 0 {
            return Err(OdeError::InvalidMaxSteps { got: v });
        }
        self.max_steps = v;
        Ok(self)
    }

    // getters
    #[inline] #[must_use] pub fn initial_step(&self) -> f64 { self.initial_step }
    #[inline] #[must_use] pub fn safety(&self) -> f64 { self.safety }
    #[inline] #[must_use] pub fn max_growth(&self) -> f64 { self.max_growth }
    #[inline] #[must_use] pub fn min_step(&self) -> f64 { self.min_step }
    #[inline] #[must_use] pub fn max_steps(&self) -> usize { self.max_steps }
}

impl Default for CashKarpCfg {
    fn default() -> Self {
        Self::new()
    }
}
