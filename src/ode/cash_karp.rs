//! Cash-Karp Adaptive Runge-Kutta
//!
//! Integrates `dx/dt = f(x, t)` with the
//! [Cash-Karp](https://en.wikipedia.org/wiki/Cash%E2%80%93Karp_method) embedded
//! 4(5) pair. The six stages give a fifth-order solution, which the
//! integrator advances with, and a fourth-order companion whose distance
//! from it is the local error estimate.
//!
//! Step-size update after every attempt, accepted or not:
//!
//! ```text
//! h' = safety * h * (tol / err)^(1/5)      (err > 0)
//! h' = max_growth * h                       (err == 0)
//! ```

use log::{debug, trace, warn};

use crate::ode::algorithms::Algorithm;
use crate::ode::config::CashKarpCfg;
use crate::ode::errors::OdeError;
use crate::ode::report::{OdeReport, TerminationReason};
use crate::ode::tableau::{A, B4, B5, C, STAGES};

const ALGORITHM: Algorithm = Algorithm::CashKarp;

/// Result of a single embedded step.
///
/// - `next`  : fifth-order state at `t + h`
/// - `error` : mean over components of `|fifth - fourth|`
#[derive(Debug, Clone)]
pub struct StepEstimate {
    pub next: Vec<f64>,
    pub error: f64,
}

/// Evaluates the right-hand side, checking length and finiteness.
#[inline]
fn eval_rhs<F>(func: &mut F, x: &[f64], t: f64) -> Result<Vec<f64>, OdeError>
where F: FnMut(&[f64], f64) -> Vec<f64> {
    let dx = func(x, t);
    if dx.len() != x.len() {
        return Err(OdeError::DimensionMismatch { expected: x.len(), got: dx.len() });
    }
    if dx.iter().any(|v| !v.is_finite()) {
        return Err(OdeError::NonFiniteEvaluation { t });
    }
    Ok(dx)
}

/// Takes one Cash-Karp step of size `h` from `(x, t)`.
///
/// # Arguments
/// - `func` : right-hand side `f(x, t)`, must return `x.len()` components
/// - `x`    : current state
/// - `t`    : current time
/// - `h`    : step size (finite, non-zero; negative steps integrate backwards)
///
/// # Returns
/// [`StepEstimate`] with the fifth-order state and the averaged error.
///
/// # Errors
/// - [`OdeError::EmptyState`]          : `x` is empty
/// - [`OdeError::InvalidStep`]         : `h` is zero or non-finite
/// - [`OdeError::DimensionMismatch`]   : `func` returned the wrong length
/// - [`OdeError::NonFiniteEvaluation`] : `func` returned NaN/inf
pub fn cash_karp_step<F>(
    mut func: F,
    x: &[f64],
    t: f64,
    h: f64,
) -> Result<StepEstimate, OdeError>
where F: FnMut(&[f64], f64) -> Vec<f64> {
    if x.is_empty() {
        return Err(OdeError::EmptyState);
    }
    if !h.is_finite() || h == 0.0 {
        return Err(OdeError::InvalidStep { got: h });
    }

    let n = x.len();

    // k[s] holds h * f at stage s
    let mut k: Vec<Vec<f64>> = Vec::with_capacity(STAGES);
    let mut stage_x = vec![0.0; n];

    for s in 0..STAGES {
        for j in 0..n {
            let mut acc = x[j];
            for (m, km) in k.iter().enumerate() {
                acc += A[s][m] * km[j];
            }
            stage_x[j] = acc;
        }

        let mut ks = eval_rhs(&mut func, &stage_x, t + C[s] * h)?;
        for v in ks.iter_mut() {
            *v *= h;
        }
        k.push(ks);
    }

    let mut next = Vec::with_capacity(n);
    let mut error = 0.0;
    for j in 0..n {
        let mut fifth = x[j];
        let mut fourth = x[j];
        for s in 0..STAGES {
            fifth  += B5[s] * k[s][j];
            fourth += B4[s] * k[s][j];
        }
        error += (fifth - fourth).abs();
        next.push(fifth);
    }
    error /= n as f64;

    Ok(StepEstimate { next, error })
}

/// Step size to try after a step of size `h` produced error `err`.
///
/// The controller formula is applied as is; `max_growth` only stands in
/// for the unbounded factor of an exactly zero error.
#[inline]
fn next_step_size(h: f64, err: f64, tol: f64, cfg: &CashKarpCfg) -> f64 {
    if err == 0.0 {
        return h * cfg.max_growth();
    }
    let exponent = 1.0 / f64::from(ALGORITHM.error_order() + 1);
    cfg.safety() * h * (tol / err).powf(exponent)
}

/// Integrates `dx/dt = func(x, t)` from `t0` to `t_final`.
///
/// # Arguments
/// - `func`    : right-hand side `f(x, t)`
/// - `x0`      : initial state (non-empty)
/// - `t0`      : initial time
/// - `t_final` : end time, `>= t0`
/// - `tol`     : accepted mean absolute local error per step (finite, > 0)
/// - `cfg`     : [`CashKarpCfg`] (initial step, safety, zero-error growth, limits)
///
/// # Returns
/// [`OdeReport`] with
/// - `state`, `t`         : final state and the time it belongs to
/// - `accepted_steps`     : accepted steps
/// - `rejected_steps`     : rejected attempts
/// - `evaluations`        : right-hand side evaluations
/// - `last_step`          : last attempted step size
/// - `next_step`          : controller's proposal for the next step
/// - `termination_reason` : why it stopped
/// - `algorithm_name`     : `"cash_karp"`
///
/// # Errors
/// Raised before any stepping:
/// - [`OdeError::InvalidTolerance`] : `tol` NaN/inf or `<= 0`
/// - [`OdeError::InvalidTimeSpan`]  : non-finite times or `t_final < t0`
/// - [`OdeError::EmptyState`]       : `x0` is empty
///
/// Raised while stepping:
/// - [`OdeError::DimensionMismatch`]   : `func` returned the wrong length
/// - [`OdeError::NonFiniteEvaluation`] : `func` returned NaN/inf
///
/// # Notes
/// - A step is accepted when `err < tol`; on rejection the step is retried
///   from the same `(x, t)` with the shrunk size.
/// - The last step is shortened so that `t` lands on `t_final` exactly.
/// - Hitting `max_steps` or `min_step` is not an error; check
///   [`OdeReport::reached_final`].
pub fn solve<F>(
    mut func: F,
    x0: &[f64],
    t0: f64,
    t_final: f64,
    tol: f64,
    cfg: CashKarpCfg,
) -> Result<OdeReport, OdeError>
where F: FnMut(&[f64], f64) -> Vec<f64> {
    if !tol.is_finite() || tol <= 0.0 {
        return Err(OdeError::InvalidTolerance { got: tol });
    }
    if !t0.is_finite() || !t_final.is_finite() || t_final < t0 {
        return Err(OdeError::InvalidTimeSpan { t0, t_final });
    }
    if x0.is_empty() {
        return Err(OdeError::EmptyState);
    }

    let mut state = x0.to_vec();
    let mut t = t0;
    let mut h = cfg.initial_step();
    let mut last_step = 0.0;

    let mut accepted = 0;
    let mut rejected = 0;
    let mut evaluations = 0;

    let termination_reason = loop {
        if t >= t_final {
            break TerminationReason::ReachedFinal;
        }
        if accepted + rejected >= cfg.max_steps() {
            warn!(
                "cash_karp stopped at t={t} after {} steps without reaching t_final={t_final}",
                cfg.max_steps()
            );
            break TerminationReason::StepLimit;
        }
        if h <= cfg.min_step() || t + h == t {
            warn!("cash_karp step size underflow at t={t}: h={h}");
            break TerminationReason::StepSizeUnderflow;
        }

        let remaining = t_final - t;
        let h_used = h.min(remaining);

        let step = cash_karp_step(&mut func, &state, t, h_used)?;
        evaluations += STAGES;
        if !step.error.is_finite() {
            return Err(OdeError::NonFiniteEvaluation { t });
        }

        last_step = h_used;
        h = next_step_size(h_used, step.error, tol, &cfg);

        if step.error < tol {
            accepted += 1;
            state = step.next;
            t = if h_used == remaining { t_final } else { t + h_used };
        } else {
            rejected += 1;
            trace!("rejected step at t={t}: h={h_used}, err={}, retry h={h}", step.error);
        }
    };

    debug!(
        "cash_karp finished at t={t}: {accepted} accepted, {rejected} rejected, {evaluations} evaluations"
    );

    Ok(OdeReport {
        state,
        t,
        accepted_steps     : accepted,
        rejected_steps     : rejected,
        evaluations,
        last_step,
        next_step          : h,
        termination_reason,
        algorithm_name     : ALGORITHM.algorithm_name(),
    })
}
