use rill::quadrature::trapezoid::trapezoid;

#[test]
fn refines_toward_exact() {
    let exact = 1f64.exp() - 1.0;
    let coarse = (trapezoid(f64::exp, 0.0, 1.0, 4) - exact).abs();
    let fine = (trapezoid(f64::exp, 0.0, 1.0, 8) - exact).abs();

    // halving h quarters the error
    assert!((coarse / fine - 4.0).abs() <= 0.05);
}

#[test]
fn reversed_bounds_negate() {
    let fwd = trapezoid(|x| x * x, 0.0, 2.0, 16);
    let rev = trapezoid(|x| x * x, 2.0, 0.0, 16);
    assert!((fwd + rev).abs() <= 1e-14);
}

#[test]
fn samples_n_plus_one_points() {
    let mut calls = 0;
    trapezoid(|x| { calls += 1; x }, 0.0, 1.0, 5);
    assert_eq!(calls, 6);
}
