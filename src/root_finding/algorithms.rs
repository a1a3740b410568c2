//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum and the [`MAX_ITER_FLOOR`] used when no
//! iteration cap is configured.

/// Lower bound on the resolved iteration cap. The bisection bound alone is
/// too tight for Brent's method, which may spend several interpolation
/// steps before each forced bisection.
pub const MAX_ITER_FLOOR: usize = 500;

/// Root-finding algorithm variants.
/// - [`Algorithm::Brent`] : bracketing bisection with secant and inverse quadratic steps
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Brent,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Brent => "brent",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
