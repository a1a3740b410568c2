//! Differentiation algorithm definitions.

/// Step `k` of row 0 is `h0 / 2^k`. Past this many halvings the smallest
/// difference quotient is dominated by rounding for any reasonable `h0`.
pub const MAX_ROWS_LIMIT: usize = 16;

/// Differentiation algorithm variants.
/// - [`Algorithm::RichardsonCentral`] : central differences refined by Richardson extrapolation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    RichardsonCentral,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::RichardsonCentral => "richardson_central",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
