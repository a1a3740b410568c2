use std::f64::consts::PI;

use rill::ode::cash_karp::{cash_karp_step, solve};
use rill::ode::config::CashKarpCfg;
use rill::ode::errors::OdeError;
use rill::ode::report::TerminationReason;

type TestResult = Result<(), OdeError>;

// x' = 2 - y, y' = 4 - x
fn coupled(x: &[f64], _t: f64) -> Vec<f64> {
    vec![2.0 - x[1], 4.0 - x[0]]
}

fn decay(x: &[f64], _t: f64) -> Vec<f64> {
    vec![-x[0]]
}

fn oscillator(x: &[f64], _t: f64) -> Vec<f64> {
    vec![x[1], -x[0]]
}

#[test]
fn single_step_values() -> TestResult {
    let step = cash_karp_step(coupled, &[0.0, 0.0], 0.0, 0.01)?;

    assert!((step.next[0] - 0.019_800_331_7).abs() <= 1e-6);
    assert!((step.next[1] - 0.039_900_665_8).abs() <= 1e-6);
    assert!(step.error >= 0.0 && step.error < 1e-9);
    Ok(())
}

#[test]
fn single_step_rejects_bad_input() {
    assert!(matches!(cash_karp_step(decay, &[], 0.0, 0.1), Err(OdeError::EmptyState)));
    assert!(matches!(cash_karp_step(decay, &[1.0], 0.0, 0.0), Err(OdeError::InvalidStep { .. })));
    assert!(matches!(
        cash_karp_step(decay, &[1.0], 0.0, f64::NAN),
        Err(OdeError::InvalidStep { .. })
    ));
}

#[test]
fn exponential_decay() -> TestResult {
    let rep = solve(decay, &[1.0], 0.0, 1.0, 1e-10, CashKarpCfg::new())?;

    assert!(rep.reached_final());
    assert_eq!(rep.t, 1.0);
    assert_eq!(rep.algorithm_name, "cash_karp");
    assert!((rep.state[0] - (-1f64).exp()).abs() <= 1e-7);
    assert_eq!(rep.evaluations, 6 * (rep.accepted_steps + rep.rejected_steps));
    Ok(())
}

#[test]
fn harmonic_oscillator_full_period() -> TestResult {
    let rep = solve(oscillator, &[1.0, 0.0], 0.0, 2.0 * PI, 1e-8, CashKarpCfg::new())?;

    assert!(rep.reached_final());
    assert_eq!(rep.t, 2.0 * PI);
    assert!((rep.state[0] - 1.0).abs() <= 1e-5);
    assert!(rep.state[1].abs() <= 1e-5);
    Ok(())
}

#[test]
fn time_dependent_rhs() -> TestResult {
    // x' = cos(t), x(0) = 0
    let rep = solve(|_x: &[f64], t: f64| vec![t.cos()], &[0.0], 0.0, 3.0, 1e-10, CashKarpCfg::new())?;

    assert!((rep.state[0] - 3f64.sin()).abs() <= 1e-7);
    Ok(())
}

#[test]
fn oversized_first_step_is_rejected() -> TestResult {
    let cfg = CashKarpCfg::new().set_initial_step(1.0)?;
    let rep = solve(|x: &[f64], _t: f64| vec![-50.0 * x[0]], &[1.0], 0.0, 1.0, 1e-6, cfg)?;

    assert!(rep.rejected_steps > 0);
    assert!(rep.reached_final());
    assert!(rep.state[0].abs() <= 1e-5);
    Ok(())
}

#[test]
fn zero_length_span_returns_initial_state() -> TestResult {
    let rep = solve(decay, &[2.5], 1.0, 1.0, 1e-6, CashKarpCfg::new())?;

    assert_eq!(rep.state, vec![2.5]);
    assert_eq!(rep.t, 1.0);
    assert_eq!(rep.accepted_steps, 0);
    assert_eq!(rep.evaluations, 0);
    assert!(rep.reached_final());
    Ok(())
}

#[test]
fn step_limit() -> TestResult {
    let cfg = CashKarpCfg::new().set_max_steps(3)?;
    let rep = solve(decay, &[1.0], 0.0, 100.0, 1e-10, cfg)?;

    assert_eq!(rep.termination_reason, TerminationReason::StepLimit);
    assert_eq!(rep.accepted_steps + rep.rejected_steps, 3);
    assert!(rep.t < 100.0);
    Ok(())
}

#[test]
fn accurate_step_grows_by_controller_formula() -> TestResult {
    let step = cash_karp_step(decay, &[1.0], 0.0, 0.01)?;
    assert!(step.error > 0.0);

    let cfg = CashKarpCfg::new().set_max_steps(1)?;
    let rep = solve(decay, &[1.0], 0.0, 1.0, 1e-6, cfg)?;
    let expected = 0.99 * 0.01 * (1e-6 / step.error).powf(0.2);

    assert_eq!(rep.accepted_steps, 1);
    assert!((rep.next_step - expected).abs() <= 1e-12 * expected);
    // far beyond the zero-error growth factor
    assert!(rep.next_step > 5.0 * 0.01);
    Ok(())
}

#[test]
fn step_size_underflow() -> TestResult {
    let cfg = CashKarpCfg::new().set_min_step(0.5)?;
    let rep = solve(decay, &[1.0], 0.0, 1.0, 1e-6, cfg)?;

    assert_eq!(rep.termination_reason, TerminationReason::StepSizeUnderflow);
    assert_eq!(rep.t, 0.0);
    assert!(!rep.reached_final());
    Ok(())
}

#[test]
fn precondition_errors() {
    let cfg = CashKarpCfg::new();

    assert!(matches!(solve(decay, &[1.0], 0.0, 1.0, -1.0, cfg), Err(OdeError::InvalidTolerance { .. })));
    assert!(matches!(solve(decay, &[1.0], 0.0, 1.0, 0.0, cfg), Err(OdeError::InvalidTolerance { .. })));
    assert!(matches!(
        solve(decay, &[1.0], 1.0, 0.0, 1e-6, cfg),
        Err(OdeError::InvalidTimeSpan { t0, t_final }) if t0 == 1.0 && t_final == 0.0
    ));
    assert!(matches!(solve(decay, &[], 0.0, 1.0, 1e-6, cfg), Err(OdeError::EmptyState)));
}

#[test]
fn rhs_errors() {
    let cfg = CashKarpCfg::new();

    let err = solve(|_x: &[f64], _t: f64| vec![0.0], &[1.0, 2.0], 0.0, 1.0, 1e-6, cfg).unwrap_err();
    assert!(matches!(err, OdeError::DimensionMismatch { expected: 2, got: 1 }));

    let err = solve(|_x: &[f64], _t: f64| vec![f64::NAN], &[1.0], 0.0, 1.0, 1e-6, cfg).unwrap_err();
    assert!(matches!(err, OdeError::NonFiniteEvaluation { .. }));
}

#[test]
fn config_errors() {
    assert!(matches!(CashKarpCfg::new().set_initial_step(-0.1), Err(OdeError::InvalidInitialStep { .. })));
    assert!(matches!(CashKarpCfg::new().set_safety(1.5), Err(OdeError::InvalidSafety { .. })));
    assert!(matches!(CashKarpCfg::new().set_safety(0.0), Err(OdeError::InvalidSafety { .. })));
    assert!(matches!(CashKarpCfg::new().set_max_growth(1.0), Err(OdeError::InvalidMaxGrowth { .. })));
    assert!(matches!(CashKarpCfg::new().set_min_step(-1.0), Err(OdeError::InvalidMinStep { .. })));
    assert!(matches!(CashKarpCfg::new().set_max_steps(0), Err(OdeError::InvalidMaxSteps { got: 0 })));

    let cfg = CashKarpCfg::default();
    assert_eq!(cfg.initial_step(), 0.01);
    assert_eq!(cfg.safety(), 0.99);
    assert_eq!(cfg.max_growth(), 5.0);
}
