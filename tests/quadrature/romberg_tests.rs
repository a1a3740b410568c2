use std::f64::consts::PI;

use rill::elementwise::arange;
use rill::interpolation::{CubicSpline, SampleSet};
use rill::quadrature::config::RombergCfg;
use rill::quadrature::errors::QuadratureError;
use rill::quadrature::report::TerminationReason;
use rill::quadrature::romberg::romberg;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const ATOL: f64 = 1e-10;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn quadratic_converges_early() -> TestResult {
    let rep = romberg(|x| x * x, 0.0, 3.0, RombergCfg::new())?;

    assert!(rep.converged);
    assert_eq!(rep.termination_reason, TerminationReason::ToleranceReached);
    assert_eq!(rep.algorithm_name, "romberg");
    assert!((rep.integral - 9.0).abs() <= 1e-4);
    assert!(rep.rows < 10);
    Ok(())
}

#[test]
fn exponential() -> TestResult {
    let rep = romberg(f64::exp, 0.0, 1.0, RombergCfg::new())?;

    assert!(rep.converged);
    assert!(approx_eq(rep.integral, 1f64.exp() - 1.0));
    Ok(())
}

#[test]
fn sine_over_half_period() -> TestResult {
    let rep = romberg(f64::sin, 0.0, PI, RombergCfg::new())?;

    assert!(rep.converged);
    assert!(approx_eq(rep.integral, 2.0));
    assert!(rep.error_estimate <= 1e-10);
    Ok(())
}

#[test]
fn reversed_bounds_negate() -> TestResult {
    let fwd = romberg(|x| x * x, 0.0, 3.0, RombergCfg::new())?;
    let rev = romberg(|x| x * x, 3.0, 0.0, RombergCfg::new())?;

    assert!(approx_eq(fwd.integral, -rev.integral));
    Ok(())
}

#[test]
fn degenerate_interval() -> TestResult {
    let mut calls = 0;
    let rep = romberg(|x| { calls += 1; x }, 2.0, 2.0, RombergCfg::new())?;

    assert_eq!(rep.integral, 0.0);
    assert!(rep.converged);
    assert_eq!(rep.termination_reason, TerminationReason::DegenerateInterval);
    assert_eq!(rep.evaluations, 0);
    assert_eq!(rep.error_estimate, 0.0);
    assert_eq!(calls, 0);
    Ok(())
}

#[test]
fn nan_bounds_report_zero() -> TestResult {
    let rep = romberg(|x| x, f64::NAN, 1.0, RombergCfg::new())?;
    assert_eq!(rep.integral, 0.0);
    assert!(!rep.converged);
    assert!(rep.error_estimate.is_infinite());
    assert_eq!(rep.termination_reason, TerminationReason::NonFiniteBounds);

    let rep = romberg(|x| x, 0.0, f64::NAN, RombergCfg::new())?;
    assert_eq!(rep.termination_reason, TerminationReason::NonFiniteBounds);
    assert_eq!(rep.error_estimate, f64::INFINITY);
    Ok(())
}

#[test]
fn infinite_bounds_rejected() {
    let err = romberg(|x| (-x).exp(), 0.0, f64::INFINITY, RombergCfg::new()).unwrap_err();
    assert!(matches!(err, QuadratureError::InfiniteBounds { .. }));

    let err = romberg(|x| x, f64::NEG_INFINITY, 0.0, RombergCfg::new()).unwrap_err();
    assert!(matches!(err, QuadratureError::InfiniteBounds { .. }));
}

#[test]
fn singular_endpoint_is_an_error() {
    let err = romberg(|x| 1.0 / x, 0.0, 1.0, RombergCfg::new()).unwrap_err();
    assert!(matches!(err, QuadratureError::NonFiniteEvaluation { x, .. } if x == 0.0));
}

#[test]
fn slow_convergence_hits_row_limit() -> TestResult {
    let rep = romberg(f64::sqrt, 0.0, 1.0, RombergCfg::new())?;

    assert!(!rep.converged);
    assert_eq!(rep.termination_reason, TerminationReason::RowLimit);
    assert_eq!(rep.rows, 10);
    // 2^i + 1 nodes for each of the ten row-0 estimates
    assert_eq!(rep.evaluations, 1033);
    assert!((rep.integral - 2.0 / 3.0).abs() <= 1e-3);
    Ok(())
}

#[test]
fn single_row_is_trapezoid() -> TestResult {
    let cfg = RombergCfg::new().set_max_rows(1)?;
    let rep = romberg(|x| x * x, 0.0, 2.0, cfg)?;

    assert_eq!(rep.integral, 4.0);
    assert!(!rep.converged);
    assert_eq!(rep.rows, 1);
    assert_eq!(rep.evaluations, 2);
    Ok(())
}

#[test]
fn loose_tolerance_stops_sooner() -> TestResult {
    let tight = romberg(f64::exp, 0.0, 2.0, RombergCfg::new())?;
    let loose = romberg(f64::exp, 0.0, 2.0, RombergCfg::new().set_rel_tol(1e-4)?)?;

    assert!(loose.converged);
    assert!(loose.rows <= tight.rows);
    assert!((loose.integral - (2f64.exp() - 1.0)).abs() <= 1e-3);
    Ok(())
}

#[test]
fn config_errors() -> TestResult {
    assert!(matches!(
        RombergCfg::new().set_max_rows(0),
        Err(QuadratureError::InvalidMaxRows { got: 0, .. })
    ));
    assert!(matches!(
        RombergCfg::new().set_max_rows(31),
        Err(QuadratureError::InvalidMaxRows { got: 31, limit: 30 })
    ));
    assert!(matches!(RombergCfg::new().set_abs_tol(-1.0), Err(QuadratureError::InvalidAbsTol { .. })));
    assert!(matches!(RombergCfg::new().set_rel_tol(f64::NAN), Err(QuadratureError::InvalidRelTol { .. })));

    let abs_only = RombergCfg::new().set_abs_tol(0.0)?;
    assert!(matches!(abs_only.set_rel_tol(0.0), Err(QuadratureError::InvalidAbsRelTol { .. })));

    let cfg = RombergCfg::default();
    assert_eq!(cfg.max_rows(), 10);
    assert_eq!(cfg.abs_tol(), 1e-16);
    assert_eq!(cfg.rel_tol(), 1e-12);
    Ok(())
}

#[test]
fn agrees_with_spline_integral() -> TestResult {
    let xs = arange(0.0, 10.0, 200);
    let ys: Vec<f64> = xs.iter().map(|x| (0.3 * x).cos() * x).collect();
    let spline = CubicSpline::new(SampleSet::new(xs, ys)?)?;

    let rep = romberg(|x| spline.f(x), 2.0, 7.5, RombergCfg::new())?;
    assert!((rep.integral - spline.integral(2.0, 7.5)).abs() <= 1e-6);
    Ok(())
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_sequential() -> TestResult {
    use rill::quadrature::romberg::par_romberg;

    let f = |x: f64| (x * x).sin() + x.cos();
    let seq = romberg(f, -1.0, 2.5, RombergCfg::new())?;
    let par = par_romberg(f, -1.0, 2.5, RombergCfg::new())?;

    assert_eq!(seq.integral, par.integral);
    assert_eq!(seq.rows, par.rows);
    assert_eq!(seq.evaluations, par.evaluations);
    assert_eq!(seq.converged, par.converged);
    Ok(())
}
