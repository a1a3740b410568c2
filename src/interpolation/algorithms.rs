//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::SplineNatural`] natural cubic spline over unit-parameter tangents
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    SplineNatural,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::SplineNatural => "natural cubic spline",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}

/// Which quantity the batch evaluator reports for each query point.
/// - [`Derivative::Value`]  : s(x)
/// - [`Derivative::First`]  : s'(x)
/// - [`Derivative::Second`] : s''(x)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Derivative {
    #[default]
    Value,
    First,
    Second,
}
