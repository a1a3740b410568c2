//! Defines the struct returned by batch interpolation.
//!
//! This report summarizes key metadata about the interpolation process,
//! including the algorithm used, number of data and evaluation points,
//! which derivative was evaluated, and the evaluated values.

use crate::interpolation::algorithms::{Algorithm, Derivative};

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method (e.g. `"natural cubic spline"`)
/// - `derivative`     : which derivative order was evaluated
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `n_extrapolated` : how many of those fell outside `[x_min, x_max]`
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub derivative: Derivative,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub n_extrapolated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(
        algorithm: Algorithm,
        derivative: Derivative,
        n_provided: usize,
        n_evaluated: usize,
    ) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            derivative,
            n_provided,
            n_evaluated,
            n_extrapolated: 0,
            evaluated: Vec::with_capacity(n_evaluated),
        }
    }
}
