//! Defines the [`DerivativeReport`] struct returned by differentiation.

/// Reasons a derivative estimate may stop.
/// - [`TerminationReason::ToleranceReached`] : successive extrapolations agreed
/// - [`TerminationReason::RowLimit`]         : triangle exhausted without agreement
/// - [`TerminationReason::NonFinitePoint`]   : `x` was NaN/inf, nothing evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    RowLimit,
    NonFinitePoint,
}

/// Final report returned by [`crate::differentiation::derivative::derivative`].
///
/// [`DerivativeReport`]
/// - `derivative`         : best estimate of `f'(x)`
/// - `error_estimate`     : last difference used for the convergence test
///                          (`inf` if no comparison was made)
/// - `converged`          : `false` means the estimate may be inaccurate
/// - `rows`               : Richardson rows built
/// - `evaluations`        : total function evaluations
/// - `termination_reason` : why it stopped ([`TerminationReason`])
/// - `algorithm_name`     : algorithm name (e.g. `"richardson_central"`)
#[derive(Debug, Copy, Clone)]
pub struct DerivativeReport {
    pub derivative         : f64,
    pub error_estimate     : f64,
    pub converged          : bool,
    pub rows               : usize,
    pub evaluations        : usize,
    pub termination_reason : TerminationReason,
    pub algorithm_name     : &'static str,
}
