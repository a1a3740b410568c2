//! ODE integrator definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported steppers.

/// ODE integrator variants.
/// - [`Algorithm::CashKarp`] : embedded Runge-Kutta 4(5) pair of Cash and Karp
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    CashKarp,
}

impl Algorithm {
    /// Order of the error estimate's lower solution; the controller
    /// exponent is `1 / (order + 1)`.
    pub const fn error_order(self) -> u32 {
        match self {
            Algorithm::CashKarp => 4,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::CashKarp => "cash_karp",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
