//! Defines the [`QuadratureReport`] struct returned by quadrature.

/// Reasons a quadrature run may terminate.
/// - [`TerminationReason::ToleranceReached`]   : successive estimates agreed
/// - [`TerminationReason::RowLimit`]           : triangle exhausted without agreement
/// - [`TerminationReason::DegenerateInterval`] : `a == b`, integral is exactly 0
/// - [`TerminationReason::NonFiniteBounds`]    : a bound was NaN, nothing evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    RowLimit,
    DegenerateInterval,
    NonFiniteBounds,
}

/// Final report returned by quadrature.
///
/// [`QuadratureReport`]
/// - `integral`           : best estimate of the integral
/// - `error_estimate`     : last difference used for the convergence test
///                          (`inf` if no comparison was made)
/// - `converged`          : `false` means the estimate may be inaccurate
/// - `rows`               : Richardson rows built
/// - `evaluations`        : total integrand evaluations
/// - `termination_reason` : why the run stopped ([`TerminationReason`])
/// - `algorithm_name`     : algorithm name (e.g. `"romberg"`)
#[derive(Debug, Copy, Clone)]
pub struct QuadratureReport {
    pub integral           : f64,
    pub error_estimate     : f64,
    pub converged          : bool,
    pub rows               : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub algorithm_name     : &'static str,
}
