use crate::interpolation::algorithms::Derivative;
use crate::interpolation::errors::InterpolationError;

/// Point-wise access to a built interpolant.
///
/// Points outside [`Interpolator::domain`] are extrapolated, not rejected.
pub trait Interpolator {
    /// `[x_min, x_max]` spanned by the samples.
    fn domain(&self) -> (f64, f64);

    /// s(x), s'(x) or s''(x) depending on `order`.
    fn eval_derivative(&self, x: f64, order: Derivative) -> Result<f64, InterpolationError>;

    #[inline]
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        self.eval_derivative(x, Derivative::Value)
    }

    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// `true` if `x` needs extrapolation.
    #[inline]
    fn is_extrapolated(&self, x: f64) -> bool {
        let (lo, hi) = self.domain();
        x < lo || x > hi
    }
}
