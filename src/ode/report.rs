//! Defines the [`OdeReport`] struct returned by the adaptive integrator.

/// Reasons an integration may terminate.
/// - [`TerminationReason::ReachedFinal`]      : `t == t_final`
/// - [`TerminationReason::StepLimit`]         : `max_steps` attempts used up first
/// - [`TerminationReason::StepSizeUnderflow`] : step shrank to `min_step` or below
///   the resolution of `t`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ReachedFinal,
    StepLimit,
    StepSizeUnderflow,
}

/// Final report returned by [`crate::ode::cash_karp::solve`].
///
/// [`OdeReport`]
/// - `state`              : state vector at `t`
/// - `t`                  : time reached
/// - `accepted_steps`     : steps whose error met the tolerance
/// - `rejected_steps`     : steps retried with a smaller step size
/// - `evaluations`        : total right-hand side evaluations
/// - `last_step`          : size of the last attempted step
/// - `next_step`          : step size the controller would try next
/// - `termination_reason` : why it stopped ([`TerminationReason`])
/// - `algorithm_name`     : algorithm name (e.g. `"cash_karp"`)
#[derive(Debug, Clone)]
pub struct OdeReport {
    pub state              : Vec<f64>,
    pub t                  : f64,
    pub accepted_steps     : usize,
    pub rejected_steps     : usize,
    pub evaluations        : usize,
    pub last_step          : f64,
    pub next_step          : f64,
    pub termination_reason : TerminationReason,
    pub algorithm_name     : &'static str,
}

impl OdeReport {
    /// `true` when the integration got all the way to `t_final`.
    pub fn reached_final(&self) -> bool {
        self.termination_reason == TerminationReason::ReachedFinal
    }
}
