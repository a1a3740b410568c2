//! Richardson-extrapolated central differences.
//!
//! Row 0 holds `(f(x + h) - f(x - h)) / 2h` for `h = h0, h0/2, h0/4, …`.
//! The error of a central difference expands in even powers of `h`, the
//! same shape as the trapezoid error, so [`crate::richardson`] refines it
//! exactly as Romberg quadrature does.

use log::{debug, trace, warn};

use crate::differentiation::algorithms::Algorithm;
use crate::differentiation::config::DerivativeCfg;
use crate::differentiation::errors::DerivativeError;
use crate::differentiation::report::{DerivativeReport, TerminationReason};
use crate::richardson::extrapolate;

const ALGORITHM: Algorithm = Algorithm::RichardsonCentral;

/// Estimates `f'(x)`.
///
/// # Arguments
/// - `func` : function, evaluated at `x ± h` only (never at `x` itself)
/// - `x`    : point of differentiation
/// - `cfg`  : [`DerivativeCfg`] (initial step, row count, tolerances)
///
/// # Returns
/// [`DerivativeReport`]; a NaN/inf `x` gives a zero estimate with
/// `converged = false` and [`TerminationReason::NonFinitePoint`].
///
/// # Errors
/// - [`DerivativeError::NonFiniteEvaluation`] : `func` produced NaN/inf,
///   e.g. a step crossed the edge of its domain
pub fn derivative<F>(
    mut func: F,
    x: f64,
    cfg: DerivativeCfg,
) -> Result<DerivativeReport, DerivativeError>
where F: FnMut(f64) -> f64 {
    if !x.is_finite() {
        return Ok(DerivativeReport {
            derivative         : 0.0,
            error_estimate     : f64::INFINITY,
            converged          : false,
            rows               : 0,
            evaluations        : 0,
            termination_reason : TerminationReason::NonFinitePoint,
            algorithm_name     : ALGORITHM.algorithm_name(),
        });
    }

    let k_rows = cfg.max_rows();
    let mut h = cfg.step_at(x);
    let mut eval = |t: f64| -> Result<f64, DerivativeError> {
        let ft = func(t);
        if !ft.is_finite() {
            return Err(DerivativeError::NonFiniteEvaluation { x: t, fx: ft });
        }
        Ok(ft)
    };

    let mut row0 = Vec::with_capacity(k_rows);
    for _ in 0..k_rows {
        // divide by the spacing actually sampled after rounding
        let (hi, lo) = (x + h, x - h);
        let step = hi - lo;
        row0.push((eval(hi)? - eval(lo)?) / step);
        h *= 0.5;
    }
    trace!("derivative row 0 at x={x}: {:?}", row0);

    let ext = extrapolate(row0, |estimate| cfg.tolerance(estimate));
    let termination_reason = if ext.converged {
        debug!("derivative at x={x} converged after {} rows", ext.rows);
        TerminationReason::ToleranceReached
    } else {
        warn!(
            "derivative at x={x} did not converge within {k_rows} rows (last delta {})",
            ext.error_estimate
        );
        TerminationReason::RowLimit
    };

    Ok(DerivativeReport {
        derivative         : ext.estimate,
        error_estimate     : ext.error_estimate,
        converged          : ext.converged,
        rows               : ext.rows,
        evaluations        : 2 * k_rows,
        termination_reason,
        algorithm_name     : ALGORITHM.algorithm_name(),
    })
}
