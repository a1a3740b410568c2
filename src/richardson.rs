//! Richardson extrapolation over a sequence of estimates whose error
//! expands in even powers of a step that halves from one estimate to the
//! next.
//!
//! Row 0 holds the raw estimates, coarsest first. Row `k` cancels the
//! `h^(2k)` term of row `k - 1`:
//!
//! ```text
//! R[k][i] = (4^k R[k-1][i+1] - R[k-1][i]) / (4^k - 1)
//! ```
//!
//! Shared by Romberg quadrature (trapezoid sums) and the central-difference
//! derivative.

use log::trace;

/// Outcome of running the triangle on one row 0.
#[derive(Debug, Copy, Clone)]
pub(crate) struct Extrapolation {
    pub estimate: f64,
    pub error_estimate: f64,
    pub converged: bool,
    pub rows: usize,
}

/// Builds rows until the two most refined entries of a row agree within
/// `tolerance(estimate)`.
///
/// The last row has a single entry and is compared with the previous
/// row's last entry. A one-entry row 0 cannot be compared at all; it is
/// returned unconverged with an infinite error estimate.
pub(crate) fn extrapolate<T>(row0: Vec<f64>, tolerance: T) -> Extrapolation
where T: Fn(f64) -> f64 {
    let k_rows = row0.len();
    let mut prev = row0;
    let mut result = Extrapolation {
        estimate: prev.last().copied().unwrap_or(0.0),
        error_estimate: f64::INFINITY,
        converged: false,
        rows: k_rows.min(1),
    };

    for k in 1..k_rows {
        let m = 4f64.powi(k as i32);
        let row: Vec<f64> = (0..k_rows - k)
            .map(|i| (m * prev[i + 1] - prev[i]) / (m - 1.0))
            .collect();

        let last = row[row.len() - 1];
        let reference = if row.len() >= 2 { row[row.len() - 2] } else { prev[prev.len() - 1] };

        result.estimate = last;
        result.error_estimate = (last - reference).abs();
        result.rows = k + 1;
        trace!("richardson row {k}: estimate={last}, delta={}", result.error_estimate);

        if result.error_estimate <= tolerance(last) {
            result.converged = true;
            return result;
        }
        prev = row;
    }

    result
}
