//! tests for the Thomas algorithm
use rill::interpolation::errors::InterpolationError;
use rill::interpolation::spline::tridiagonal::{solve_spline_system, thomas};

type TestResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

fn mat_vec(sub: &[f64], diag: &[f64], sup: &[f64], x: &[f64]) -> Vec<f64> {
    let n = x.len();
    (0..n)
        .map(|i| {
            let mut v = diag[i] * x[i];
            if i > 0 { v += sub[i] * x[i - 1]; }
            if i + 1 < n { v += sup[i] * x[i + 1]; }
            v
        })
        .collect()
}

#[test]
fn general_system_residual() -> TestResult {
    let n = 12;
    let sub: Vec<f64>  = (0..n).map(|i| 0.5 + 0.1 * i as f64).collect();
    let sup: Vec<f64>  = (0..n).map(|i| -0.3 + 0.05 * i as f64).collect();
    let diag: Vec<f64> = (0..n).map(|i| 3.0 + (i as f64).cos()).collect();
    let rhs: Vec<f64>  = (0..n).map(|i| (i as f64 * 1.3).sin()).collect();

    let mut x = rhs.clone();
    thomas(&sub, &diag, &sup, &mut x)?;

    let back = mat_vec(&sub, &diag, &sup, &x);
    for (i, (b, r)) in back.iter().zip(&rhs).enumerate() {
        assert!((b - r).abs() <= ATOL, "row {i}: {b} vs {r}");
    }
    Ok(())
}

#[test]
fn spline_system_residual() {
    let n = 40;
    let rhs: Vec<f64> = (0..n).map(|i| 3.0 * ((i as f64) * 0.2).exp().ln_1p()).collect();

    let mut x = rhs.clone();
    solve_spline_system(&mut x);

    let sub = vec![1.0; n];
    let sup = vec![1.0; n];
    let mut diag = vec![4.0; n];
    diag[0] = 2.0;
    diag[n - 1] = 2.0;

    let back = mat_vec(&sub, &diag, &sup, &x);
    for (b, r) in back.iter().zip(&rhs) {
        assert!((b - r).abs() <= ATOL);
    }
}

#[test]
fn constant_slope_target_gives_constant_tangents() {
    // 3 * (y[i+1] - y[i-1]) for y = 2i
    let mut d = vec![6.0, 12.0, 12.0, 12.0, 6.0];
    solve_spline_system(&mut d);
    for v in d {
        assert!((v - 2.0).abs() <= ATOL);
    }
}

#[test]
fn empty_system_is_noop() -> TestResult {
    let mut d: [f64; 0] = [];
    solve_spline_system(&mut d);
    thomas(&[], &[], &[], &mut d)?;
    Ok(())
}

#[test]
fn mismatched_diagonals() {
    let mut rhs = [1.0, 2.0, 3.0];
    let err = thomas(&[0.0, 1.0], &[2.0, 2.0, 2.0], &[1.0, 1.0, 0.0], &mut rhs).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 2, y_len: 3 }));
}

#[test]
fn singular_pivot() {
    // second pivot: 1 - 1 * (1 / 1) = 0
    let mut rhs = [1.0, 1.0];
    let err = thomas(&[0.0, 1.0], &[1.0, 1.0], &[1.0, 0.0], &mut rhs).unwrap_err();
    assert!(matches!(err, InterpolationError::SingularSystem { row: 1 }));
}
