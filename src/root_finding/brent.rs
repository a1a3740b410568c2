//! Brent's Method
//!
//! Bracketing root finder: every iteration proposes an inverse quadratic
//! interpolation (or secant) step and falls back to bisection whenever the
//! proposal leaves the safe part of the bracket or fails to shrink it fast
//! enough. The sign change between `a` and `b` is kept throughout, so the
//! method converges for any continuous function with a valid bracket.

use log::{debug, trace, warn};

use crate::root_finding::algorithms::{Algorithm, MAX_ITER_FLOOR};
use crate::root_finding::config::BrentCfg;
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::report::{RootFindingReport, TerminationReason, ToleranceSatisfied};

const ALGORITHM: Algorithm = Algorithm::Brent;

#[inline]
fn opposite_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() != y.is_sign_positive()
}

/// Evaluates `func(x)`, counting the call and rejecting NaN/inf.
#[inline]
fn checked<F>(func: &mut F, x: f64, evaluations: &mut usize) -> Result<f64, RootFindingError>
where F: FnMut(f64) -> f64 {
    *evaluations += 1;
    let fx = func(x);
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}

/// Inverse quadratic interpolation through three points with distinct
/// function values (Lagrange form).
#[inline]
fn iqi((a, fa): (f64, f64), (b, fb): (f64, f64), (c, fc): (f64, f64)) -> f64 {
    a * fb * fc / ((fa - fb) * (fa - fc))
        + b * fa * fc / ((fb - fa) * (fb - fc))
        + c * fa * fb / ((fc - fa) * (fc - fb))
}

/// Root of the line through `(a, fa)` and `(b, fb)`.
#[inline]
fn secant((a, fa): (f64, f64), (b, fb): (f64, f64)) -> f64 {
    b - fb * (b - a) / (fb - fa)
}

/// `s` strictly between `(3a + b) / 4` and `b`, in either orientation.
#[inline]
fn interior_window_ok(a: f64, b: f64, s: f64) -> bool {
    let lower = (3.0 * a + b) / 4.0;
    if lower < b { s > lower && s < b } else { s < lower && s > b }
}

/// Iterations pure bisection needs to shrink `[a, b]` below `tol`.
#[inline]
fn bisection_bound(a: f64, b: f64, tol: f64) -> usize {
    ((b - a).abs() / tol).log2().ceil().max(0.0) as usize
}

fn report(
    root: f64,
    f_root: f64,
    (a, b): (f64, f64),
    iterations: usize,
    evaluations: usize,
    tolerance_satisfied: ToleranceSatisfied,
) -> RootFindingReport {
    let converged = tolerance_satisfied != ToleranceSatisfied::ToleranceNotReached;
    RootFindingReport {
        root,
        f_root,
        converged,
        iterations,
        evaluations,
        termination_reason: if converged {
            TerminationReason::ToleranceReached
        } else {
            TerminationReason::IterationLimit
        },
        tolerance_satisfied,
        bracket: [a.min(b), a.max(b)],
        algorithm_name: ALGORITHM.algorithm_name(),
    }
}

/// Finds a root of `func` inside `[a, b]` with Brent's method.
///
/// # Arguments
/// - `func` : continuous function with `f(a)` and `f(b)` of opposite sign
/// - `a`    : lower bound (finite)
/// - `b`    : upper bound (finite, `> a`)
/// - `cfg`  : [`BrentCfg`] (tolerances, optional iteration cap)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`, `f_root`      : best estimate and its function value
/// - `converged`           : whether a tolerance was met
/// - `iterations`          : main-loop iterations
/// - `evaluations`         : function evaluations
/// - `termination_reason`  : why it stopped
/// - `tolerance_satisfied` : which tolerance fired
/// - `bracket`             : final sign-change interval
/// - `algorithm_name`      : `"brent"`
///
/// # Errors
/// - [`RootFindingError::InvalidBounds`]       : `a`/`b` non-finite or `a >= b`
/// - [`RootFindingError::NoSignChange`]        : `f(a)` and `f(b)` share a sign
/// - [`RootFindingError::NonFiniteEvaluation`] : `func(x)` produced NaN/inf
///
/// # Notes
/// - Without `max_iter` the cap is the bisection bound for the initial
///   bracket, raised to [`MAX_ITER_FLOOR`].
/// - Running out of iterations is reported with `converged = false`.
pub fn brent<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: BrentCfg,
) -> Result<RootFindingReport, RootFindingError>
where F: FnMut(f64) -> f64 {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(RootFindingError::InvalidBounds { a, b });
    }

    let abs_fx = cfg.abs_fx();
    let mut evaluations = 0;

    let mut fa = checked(&mut func, a, &mut evaluations)?;
    if fa.abs() <= abs_fx {
        return Ok(report(a, fa, (a, b), 0, evaluations, ToleranceSatisfied::AbsFxReached));
    }
    let mut fb = checked(&mut func, b, &mut evaluations)?;
    if fb.abs() <= abs_fx {
        return Ok(report(b, fb, (a, b), 0, evaluations, ToleranceSatisfied::AbsFxReached));
    }
    if !opposite_sign(fa, fb) {
        return Err(RootFindingError::NoSignChange { a, b });
    }

    let max_iter = cfg
        .max_iter()
        .unwrap_or_else(|| bisection_bound(a, b, cfg.width_tol(a, b)).max(MAX_ITER_FLOOR));

    // b is the best estimate: |f(b)| <= |f(a)|
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut width_tol = cfg.width_tol(a, b);
    if (b - a).abs() <= width_tol {
        return Ok(report(b, fb, (a, b), 0, evaluations, ToleranceSatisfied::WidthTolReached));
    }

    // c is the previous b, d the one before
    let (mut c, mut fc) = (a, fa);
    let mut d = c;
    let mut bisected = true;

    for iter in 1..=max_iter {
        let proposal = if fa != fc && fb != fc {
            iqi((a, fa), (b, fb), (c, fc))
        } else {
            secant((a, fa), (b, fb))
        };

        let last_move = if bisected { (b - c).abs() } else { (c - d).abs() };
        let reject = !proposal.is_finite()
            || !interior_window_ok(a, b, proposal)
            || (proposal - b).abs() >= 0.5 * last_move
            || last_move < width_tol;

        let s = if reject { 0.5 * (a + b) } else { proposal };
        bisected = reject;

        let fs = checked(&mut func, s, &mut evaluations)?;
        d = c;
        c = b;
        fc = fb;

        if opposite_sign(fa, fs) {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }
        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
        trace!("brent iter {iter}: b={b}, f(b)={fb}, width={}, bisected={bisected}", (b - a).abs());

        if fb.abs() <= abs_fx {
            debug!("brent converged on |f| at x={b} after {iter} iterations");
            return Ok(report(b, fb, (a, b), iter, evaluations, ToleranceSatisfied::AbsFxReached));
        }

        width_tol = cfg.width_tol(a, b);
        if (b - a).abs() <= width_tol {
            debug!("brent converged on bracket width at x={b} after {iter} iterations");
            return Ok(report(b, fb, (a, b), iter, evaluations, ToleranceSatisfied::WidthTolReached));
        }
    }

    warn!("brent stopped after {max_iter} iterations with bracket width {}", (b - a).abs());
    Ok(report(b, fb, (a, b), max_iter, evaluations, ToleranceSatisfied::ToleranceNotReached))
}
