//! Thomas algorithm for tridiagonal systems.
//!
//! [`thomas`] solves a general system given its three diagonals;
//! [`solve_spline_system`] is the constant-band system behind the natural
//! spline tangents:
//!
//! ```text
//! | 2 1             |
//! | 1 4 1           |
//! |   1 4 1         |
//! |       ...       |
//! |         1 4 1   |
//! |           1 2   |
//! ```
//!
//! Both run forward elimination followed by back substitution in O(n) and
//! overwrite the right-hand side with the solution.

use crate::interpolation::errors::InterpolationError;

/// Solves `A x = rhs` in place for a tridiagonal `A`.
///
/// # Arguments
/// - `sub`  : sub-diagonal, `sub[i]` multiplies `x[i - 1]` in row `i` (`sub[0]` unused)
/// - `diag` : main diagonal
/// - `sup`  : super-diagonal, `sup[i]` multiplies `x[i + 1]` in row `i` (`sup[n - 1]` unused)
/// - `rhs`  : right-hand side on entry, solution on return
///
/// # Errors
/// - [`InterpolationError::UnequalLength`]  : diagonals and `rhs` differ in length
/// - [`InterpolationError::SingularSystem`] : a pivot is zero or non-finite
///
/// # Notes
/// - No pivoting. Exact (up to rounding) for strictly diagonally dominant systems.
pub fn thomas(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    rhs: &mut [f64],
) -> Result<(), InterpolationError> {
    let n = rhs.len();
    for len in [sub.len(), diag.len(), sup.len()] {
        if len != n {
            return Err(InterpolationError::UnequalLength { x_len: len, y_len: n });
        }
    }
    if n == 0 {
        return Ok(());
    }

    // normalized super-diagonal
    let mut c = sup.to_vec();

    if diag[0] == 0.0 || !diag[0].is_finite() {
        return Err(InterpolationError::SingularSystem { row: 0 });
    }
    c[0] /= diag[0];
    rhs[0] /= diag[0];

    // forward elimination
    for i in 1..n {
        let pivot = diag[i] - sub[i] * c[i - 1];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(InterpolationError::SingularSystem { row: i });
        }
        let m = 1.0 / pivot;
        c[i] *= m;
        rhs[i] = (rhs[i] - sub[i] * rhs[i - 1]) * m;
    }

    // back substitution
    for i in (0..n - 1).rev() {
        rhs[i] -= c[i] * rhs[i + 1];
    }

    Ok(())
}

/// Solves the natural-spline tangent system in place.
///
/// Sub/super-diagonal 1, main diagonal 4 with 2 in the first and last
/// rows. For a single unknown the system is `2 x = d`. The matrix is
/// strictly diagonally dominant, so no pivot can vanish.
pub fn solve_spline_system(d: &mut [f64]) {
    let n = d.len();
    if n == 0 {
        return;
    }

    let diag = |i: usize| if i == 0 || i == n - 1 { 2.0 } else { 4.0 };

    let mut c = vec![1.0; n];
    c[0] /= diag(0);
    d[0] /= diag(0);

    for i in 1..n {
        let m = 1.0 / (diag(i) - c[i - 1]);
        c[i] *= m;
        d[i] = (d[i] - d[i - 1]) * m;
    }

    for i in (0..n - 1).rev() {
        d[i] -= c[i] * d[i + 1];
    }
}
