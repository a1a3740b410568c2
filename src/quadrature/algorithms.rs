//! Quadrature algorithm definitions.
//!
//! Provides the [`Algorithm`] enum along with the [`MAX_ROWS_LIMIT`] hard
//! cap on the size of a Richardson triangle.

/// Row 0 of a `K`-row triangle samples `2^(K-1) + 1` points, so the cost
/// doubles with every row. Beyond this cap a single call would evaluate
/// the integrand more than half a billion times.
pub const MAX_ROWS_LIMIT: usize = 30;

/// Quadrature algorithm variants.
/// - [`Algorithm::Romberg`] : trapezoid sequence refined by Richardson extrapolation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Romberg,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Romberg => "romberg",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
