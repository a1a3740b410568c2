//! Romberg Integration
//!
//! Implements [Romberg's method](https://en.wikipedia.org/wiki/Romberg%27s_method).
//!
//! Row 0 of the Richardson triangle holds composite trapezoid estimates with
//! `1, 2, 4, …, 2^(K-1)` segments; [`crate::richardson`] builds the rest.
//! Each row is materialized in its own buffer before the next one reads it.

use log::{debug, trace, warn};

use crate::elementwise::map_in_place;
#[cfg(feature = "parallel")]
use crate::elementwise::par_map_in_place;
use crate::quadrature::algorithms::Algorithm;
use crate::quadrature::config::RombergCfg;
use crate::quadrature::errors::QuadratureError;
use crate::quadrature::report::{QuadratureReport, TerminationReason};
use crate::quadrature::trapezoid::{fill_grid, non_finite_sample, trapezoid_sum};
use crate::richardson::extrapolate;

const ALGORITHM: Algorithm = Algorithm::Romberg;

/// Report for runs that stop before evaluating the integrand.
fn trivial_report(termination_reason: TerminationReason, converged: bool) -> QuadratureReport {
    // an empty interval is exact; anything else was never compared
    let error_estimate = if converged { 0.0 } else { f64::INFINITY };
    QuadratureReport {
        integral           : 0.0,
        error_estimate,
        converged,
        rows               : 0,
        evaluations        : 0,
        termination_reason,
        algorithm_name     : ALGORITHM.algorithm_name(),
    }
}

/// Integrates `func` over `[a, b]` with Romberg's method.
///
/// # Arguments
/// - `func` : integrand
/// - `a`    : lower bound (finite)
/// - `b`    : upper bound (finite); `b < a` gives the negated integral
/// - `cfg`  : [`RombergCfg`] (row count and agreement tolerances)
///
/// # Returns
/// [`QuadratureReport`] with
/// - `integral`           : best estimate
/// - `error_estimate`     : last compared difference
/// - `converged`          : whether the tolerance was met
/// - `rows`               : rows built
/// - `evaluations`        : integrand evaluations
/// - `termination_reason` : why it stopped
/// - `algorithm_name`     : `"romberg"`
///
/// Edge cases return a report rather than an error:
/// - `a == b`        : integral 0, converged, [`TerminationReason::DegenerateInterval`]
/// - `a` or `b` NaN  : integral 0, not converged, [`TerminationReason::NonFiniteBounds`]
///
/// # Errors
/// - [`QuadratureError::InfiniteBounds`]      : `a` or `b` is ±inf
/// - [`QuadratureError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
///
/// # Notes
/// - Convergence compares the two most refined entries of each new row
///   (the last row has one entry and is compared with the previous row's
///   last entry).
/// - Exhausting all rows is not an error; check `converged`.
pub fn romberg<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: RombergCfg,
) -> Result<QuadratureReport, QuadratureError>
where F: FnMut(f64) -> f64 {
    let mut eval_batch = |xs: &mut [f64]| map_in_place(xs, &mut func);
    integrate(&mut eval_batch, a, b, cfg)
}

/// [`romberg`] with each trapezoid batch evaluated on the rayon pool.
///
/// Node values are identical to the sequential path and are summed in the
/// same order, so both return the same report.
#[cfg(feature = "parallel")]
pub fn par_romberg<F>(
    func: F,
    a: f64,
    b: f64,
    cfg: RombergCfg,
) -> Result<QuadratureReport, QuadratureError>
where F: Fn(f64) -> f64 + Sync {
    let mut eval_batch = |xs: &mut [f64]| par_map_in_place(xs, &func);
    integrate(&mut eval_batch, a, b, cfg)
}

fn integrate<E>(
    eval_batch: &mut E,
    a: f64,
    b: f64,
    cfg: RombergCfg,
) -> Result<QuadratureReport, QuadratureError>
where E: FnMut(&mut [f64]) {
    if a.is_nan() || b.is_nan() {
        return Ok(trivial_report(TerminationReason::NonFiniteBounds, false));
    }
    if a.is_infinite() || b.is_infinite() {
        return Err(QuadratureError::InfiniteBounds { a, b });
    }
    if a == b {
        return Ok(trivial_report(TerminationReason::DegenerateInterval, true));
    }

    let k_rows = cfg.max_rows();
    let mut evaluations = 0;

    // row 0: trapezoid estimates with 2^i segments
    let mut grid = Vec::with_capacity((1usize << (k_rows - 1)) + 1);
    let mut row0 = Vec::with_capacity(k_rows);
    for i in 0..k_rows {
        fill_grid(&mut grid, a, b, 1usize << i);
        eval_batch(grid.as_mut_slice());
        evaluations += grid.len();
        non_finite_sample(&grid, a, b)?;
        row0.push(trapezoid_sum(&grid, a, b));
    }
    trace!("romberg row 0: {:?}", row0);

    let ext = extrapolate(row0, |estimate| cfg.tolerance(estimate));
    let termination_reason = if ext.converged {
        debug!("romberg converged on [{a}, {b}] after {} rows, {evaluations} evaluations", ext.rows);
        TerminationReason::ToleranceReached
    } else {
        warn!(
            "romberg did not converge on [{a}, {b}] within {k_rows} rows (last delta {})",
            ext.error_estimate
        );
        TerminationReason::RowLimit
    };

    Ok(QuadratureReport {
        integral           : ext.estimate,
        error_estimate     : ext.error_estimate,
        converged          : ext.converged,
        rows               : ext.rows,
        evaluations,
        termination_reason,
        algorithm_name     : ALGORITHM.algorithm_name(),
    })
}
