//! Defines the [`RootFindingReport`] struct returned by root finding.

/// Reasons a root search may terminate.
/// - [`TerminationReason::ToleranceReached`] : see [`ToleranceSatisfied`] for which one
/// - [`TerminationReason::IterationLimit`]   : `max_iter` used up first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}

/// Which stopping test fired.
/// - [`ToleranceSatisfied::AbsFxReached`]        : `|f(root)| <= abs_fx`
/// - [`ToleranceSatisfied::WidthTolReached`]     : bracket narrower than the width tolerance
/// - [`ToleranceSatisfied::ToleranceNotReached`] : neither, with [`TerminationReason::IterationLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    ToleranceNotReached,
}

/// Final report returned by [`crate::root_finding::brent::brent`].
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `f_root`              : function value at `root`
/// - `converged`           : `false` means the iteration cap ran out
/// - `iterations`          : main-loop iterations
/// - `evaluations`         : function evaluations
/// - `termination_reason`  : why the search stopped ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance fired ([`ToleranceSatisfied`])
/// - `bracket`             : final sign-change interval, ascending
/// - `algorithm_name`      : algorithm name (e.g. `"brent"`)
#[derive(Debug, Copy, Clone)]
pub struct RootFindingReport {
    pub root                : f64,
    pub f_root              : f64,
    pub converged           : bool,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub bracket             : [f64; 2],
    pub algorithm_name      : &'static str,
}
