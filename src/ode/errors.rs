//! ODE integration error types.
//!
//! ┌ precondition failures : tolerance, time span, empty state, step size
//! ├ right-hand side       : wrong output length, non-finite output
//! └ configuration         : [`crate::ode::config::CashKarpCfg`] setters
//!
//! Running out of steps is not an error; it is reported through
//! [`crate::ode::report::TerminationReason`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OdeError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid time span: need finite t0 <= t_final. got [{t0}, {t_final}]")]
    InvalidTimeSpan { t0: f64, t_final: f64 },

    #[error("empty initial state")]
    EmptyState,

    #[error("invalid step size: must be finite and non-zero. got {got}")]
    InvalidStep { got: f64 },

    #[error("right-hand side returned {got} components, expected {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("right-hand side non-finite at t={t}")]
    NonFiniteEvaluation { t: f64 },

    #[error("invalid initial_step: must be finite and > 0. got {got}")]
    InvalidInitialStep { got: f64 },

    #[error("invalid safety factor: must be in (0, 1]. got {got}")]
    InvalidSafety { got: f64 },

    #[error("invalid max_growth: must be finite and > 1. got {got}")]
    InvalidMaxGrowth { got: f64 },

    #[error("invalid min_step: must be finite and >= 0. got {got}")]
    InvalidMinStep { got: f64 },

    #[error("invalid max_steps: must be >= 1. got max_steps={got}")]
    InvalidMaxSteps { got: usize },
}
