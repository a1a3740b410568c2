//! Composite trapezoid rule.
//!
//! `n` segments sample `n + 1` equally spaced points; the last point is
//! `b` exactly rather than `a + n * h`.

use crate::elementwise::map_in_place;
use crate::quadrature::errors::QuadratureError;

/// Fills `grid` with the `n + 1` nodes of an `n`-segment rule on `[a, b]`.
pub(crate) fn fill_grid(grid: &mut Vec<f64>, a: f64, b: f64, n: usize) {
    grid.clear();
    if n == 0 {
        return;
    }
    let h = (b - a) / n as f64;
    grid.extend((0..n).map(|j| a + j as f64 * h));
    grid.push(b);
}

/// Trapezoid sum over samples `fx` taken on the nodes from [`fill_grid`].
pub(crate) fn trapezoid_sum(fx: &[f64], a: f64, b: f64) -> f64 {
    if fx.len() < 2 {
        return 0.0;
    }
    let n = fx.len() - 1;
    let h = (b - a) / n as f64;

    let ends = 0.5 * (fx[0] + fx[n]);
    let interior: f64 = fx[1..n].iter().sum();
    h * (ends + interior)
}

/// Finds the first non-finite sample, reporting its node.
pub(crate) fn non_finite_sample(fx: &[f64], a: f64, b: f64) -> Result<(), QuadratureError> {
    match fx.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(j) => {
            let n = fx.len() - 1;
            let x = if j == n { b } else { a + j as f64 * (b - a) / n as f64 };
            Err(QuadratureError::NonFiniteEvaluation { x, fx: fx[j] })
        }
    }
}

/// Approximates `∫ₐᵇ f(x) dx` with the `n`-segment composite trapezoid rule.
///
/// # Notes
/// - `n == 0` has no segments and yields `0.0`.
/// - `n == 1` is the two-point rule `(b - a) (f(a) + f(b)) / 2`.
/// - Reversed bounds give the negated integral.
/// - Non-finite samples propagate into the result unchecked; [`crate::quadrature::romberg`]
///   is the checked entry point.
pub fn trapezoid<F>(func: F, a: f64, b: f64, n: usize) -> f64
where F: FnMut(f64) -> f64 {
    let mut grid = Vec::with_capacity(n + 1);
    fill_grid(&mut grid, a, b, n);
    map_in_place(&mut grid, func);
    trapezoid_sum(&grid, a, b)
}
