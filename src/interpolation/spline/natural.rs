//! Natural Cubic Spline
//!
//! Each segment `[x[i], x[i+1]]` is a cubic Hermite polynomial in the
//! normalized parameter `t = (x - x[i]) / (x[i+1] - x[i])`. The tangents
//! `D[i]` (derivatives with respect to `t`) come from the tridiagonal system
//!
//! ```text
//! 2 D[0]   +   D[1]             = 3 (y[1]   - y[0])
//! D[i-1]   + 4 D[i] + D[i+1]    = 3 (y[i+1] - y[i-1])
//! D[n-2]   + 2 D[n-1]           = 3 (y[n-1] - y[n-2])
//! ```
//!
//! whose end rows force a zero second derivative at both ends. Queries
//! outside `[x_min, x_max]` extrapolate the end segment's cubic.

use log::debug;

use crate::interpolation::algorithms::{Algorithm, Derivative};
use crate::interpolation::config::{impl_common_cfg, CommonCfg, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::samples::SampleSet;
use crate::interpolation::spline::tridiagonal::solve_spline_system;
use crate::interpolation::traits::Interpolator;

/// Natural cubic spline configuration
///
/// # Fields
/// - `common`     : [`CommonCfg`]
/// - `derivative` : which quantity to report, [`Derivative::Value`] by default
///
/// # Construction
/// - Use [`NaturalSplineCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed spacing between adjacent sorted `x`;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Copy, Clone)]
pub struct NaturalSplineCfg<'a> {
    common: CommonCfg<'a>,
    derivative: Derivative,
}
impl<'a> NaturalSplineCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), derivative: Derivative::Value }
    }

    pub fn with_derivative(mut self, v: Derivative) -> Self { self.derivative = v; self }
}
impl Default for NaturalSplineCfg<'_> {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(NaturalSplineCfg<'a>);

/// Hermite form of the segment that serves a query point.
#[derive(Debug, Copy, Clone)]
struct Segment {
    width: f64,
    t: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Segment {
    #[inline]
    fn value(&self) -> f64 {
        let t = self.t;
        self.a + t * (self.b + t * (self.c + t * self.d))
    }

    #[inline]
    fn slope(&self) -> f64 {
        let t = self.t;
        (self.b + t * (2.0 * self.c + 3.0 * t * self.d)) / self.width
    }

    #[inline]
    fn curvature(&self) -> f64 {
        (2.0 * self.c + 6.0 * self.d * self.t) / (self.width * self.width)
    }

    /// Antiderivative in `t`, scaled back to `x`.
    #[inline]
    fn primitive(&self, t: f64) -> f64 {
        let p = t * (self.a + t * (self.b / 2.0 + t * (self.c / 3.0 + t * self.d / 4.0)));
        p * self.width
    }

    /// Limit of [`Segment::primitive`] as `t` runs to `dir * inf`.
    ///
    /// Coefficients within rounding of the largest one are treated as zero,
    /// so a cubic that is really a line does not pick up a spurious quartic
    /// term from the tangent solve.
    fn primitive_limit(&self, dir: f64) -> f64 {
        let terms = [self.a, self.b / 2.0, self.c / 3.0, self.d / 4.0];
        let scale = terms.iter().fold(0.0_f64, |m, k| m.max(k.abs()));
        let cutoff = 64.0 * f64::EPSILON * scale;

        // degree of t^(i + 1) for terms[i]
        match terms.iter().enumerate().rev().find(|(_, k)| k.abs() > cutoff) {
            None => 0.0,
            Some((i, k)) => {
                let odd = i % 2 == 0;
                let sign = if odd { dir * k.signum() } else { k.signum() };
                sign * f64::INFINITY
            }
        }
    }
}

/// Natural cubic spline built once over a sorted [`SampleSet`].
#[derive(Debug, Clone)]
pub struct CubicSpline {
    samples: SampleSet,
    coeffs: Vec<f64>,
}

impl CubicSpline {
    /// Builds the spline with [`DEFAULT_X_TOL`] as minimum sample spacing.
    ///
    /// # Errors
    /// - [`InterpolationError::InsufficientPoints`] : fewer than 2 samples
    /// - [`InterpolationError::DuplicateX`]         : adjacent sorted x closer than the spacing
    pub fn new(samples: SampleSet) -> Result<Self, InterpolationError> {
        Self::with_min_spacing(samples, DEFAULT_X_TOL)
    }

    /// Builds the spline, rejecting adjacent abscissae closer than `x_tol`.
    pub fn with_min_spacing(mut samples: SampleSet, x_tol: f64) -> Result<Self, InterpolationError> {
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: x_tol });
        }

        let n = samples.len();
        if n < 2 {
            return Err(InterpolationError::InsufficientPoints { got: n });
        }

        samples.sort();

        if let Some(w) = samples.xs().windows(2).find(|w| w[1] - w[0] < x_tol) {
            return Err(InterpolationError::DuplicateX { x1: w[0], x2: w[1] });
        }

        let y = samples.ys();
        let mut coeffs = vec![0.0; n];
        coeffs[0] = 3.0 * (y[1] - y[0]);
        for i in 1..n - 1 {
            coeffs[i] = 3.0 * (y[i + 1] - y[i - 1]);
        }
        coeffs[n - 1] = 3.0 * (y[n - 1] - y[n - 2]);

        solve_spline_system(&mut coeffs);

        debug!(
            "built natural cubic spline over {} samples on [{}, {}]",
            n,
            samples.xs()[0],
            samples.xs()[n - 1]
        );

        Ok(Self { samples, coeffs })
    }

    #[inline]
    fn segment_at(&self, i: usize, x: f64) -> Segment {
        let xs = self.samples.xs();
        let ys = self.samples.ys();

        let width = xs[i + 1] - xs[i];
        let t = (x - xs[i]) / width;
        let (yi, yi1) = (ys[i], ys[i + 1]);
        let (di, di1) = (self.coeffs[i], self.coeffs[i + 1]);

        Segment {
            width,
            t,
            a: yi,
            b: di,
            c: 3.0 * (yi1 - yi) - 2.0 * di - di1,
            d: 2.0 * (yi - yi1) + di + di1,
        }
    }

    #[inline]
    fn segment(&self, x: f64) -> Segment {
        let (i, _) = self.samples.bracket_sorted(x);
        self.segment_at(i, x)
    }

    /// Interpolated value s(x).
    pub fn f(&self, x: f64) -> f64 {
        self.segment(x).value()
    }

    /// First derivative s'(x).
    pub fn df(&self, x: f64) -> f64 {
        self.segment(x).slope()
    }

    /// Second derivative s''(x).
    pub fn ddf(&self, x: f64) -> f64 {
        self.segment(x).curvature()
    }

    /// Exact integral of the spline from `a` to `b`.
    ///
    /// Portions of `[a, b]` beyond the samples integrate the extrapolated
    /// end segments. Reversed bounds flip the sign.
    ///
    /// Edge cases:
    /// - `a` or `b` NaN, or `a == b` : 0
    /// - infinite bound : limit of the extrapolated end cubic, i.e. `±inf`,
    ///   0 for an identically zero end segment, and NaN when both tails
    ///   diverge with the same sign (`inf - inf`)
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        if a.is_nan() || b.is_nan() || a == b {
            return 0.0;
        }
        if a > b {
            return -self.integral(b, a);
        }

        let xs = self.samples.xs();
        let n = xs.len();

        let mut total = 0.0;
        for i in 0..n - 1 {
            let seg_lo = if i == 0 { f64::NEG_INFINITY } else { xs[i] };
            let seg_hi = if i == n - 2 { f64::INFINITY } else { xs[i + 1] };

            let lo = a.max(seg_lo);
            let hi = b.min(seg_hi);
            if lo >= hi {
                continue;
            }

            let seg = self.segment_at(i, xs[i]);
            let upper = if hi.is_infinite() {
                seg.primitive_limit(1.0)
            } else {
                seg.primitive((hi - xs[i]) / seg.width)
            };
            let lower = if lo.is_infinite() {
                seg.primitive_limit(-1.0)
            } else {
                seg.primitive((lo - xs[i]) / seg.width)
            };
            total += upper - lower;
        }

        total
    }

    /// Tangents with respect to the normalized segment parameter.
    pub fn coeffs(&self) -> &[f64] { &self.coeffs }

    /// Sorted samples the spline was built on.
    pub fn samples(&self) -> &SampleSet { &self.samples }

    pub fn x_min(&self) -> f64 { self.samples.xs()[0] }
    pub fn x_max(&self) -> f64 { self.samples.xs()[self.samples.len() - 1] }
}

impl Interpolator for CubicSpline {
    fn domain(&self) -> (f64, f64) {
        (self.x_min(), self.x_max())
    }

    fn eval_derivative(&self, x: f64, order: Derivative) -> Result<f64, InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::NonFiniteQuery { x });
        }
        let seg = self.segment(x);
        Ok(match order {
            Derivative::Value  => seg.value(),
            Derivative::First  => seg.slope(),
            Derivative::Second => seg.curvature(),
        })
    }
}

/// Evaluates a natural cubic spline over the data in [`CommonCfg`].
///
/// # Behavior
/// - Pairs and sorts `(x, y)`, builds a [`CubicSpline`], then evaluates
///   the configured [`Derivative`] at each point of `cfg.common.x_eval()`.
/// - Points outside `[x_min, x_max]` are extrapolated and counted in
///   `n_extrapolated`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"natural cubic spline"`
/// - `derivative`     : the configured derivative order
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `n_extrapolated` : evaluation points outside the data range
/// - `evaluated`      : spline values at each evaluation point
///
/// # Errors
/// - Any [`CommonCfg::validate`] failure (missing or mismatched data)
/// - [`InterpolationError::DuplicateX`] if two sorted x are closer than `x_tol`
pub fn interpolate(cfg: NaturalSplineCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let samples = SampleSet::new(cfg.common.x().to_vec(), cfg.common.y().to_vec())?;
    let spline = CubicSpline::with_min_spacing(samples, cfg.common.x_min_spacing())?;

    let evals = cfg.common.x_eval();
    let mut report = InterpolationReport::new(
        Algorithm::SplineNatural,
        cfg.derivative,
        spline.samples().len(),
        evals.len(),
    );

    for &xq in evals {
        if spline.is_extrapolated(xq) {
            report.n_extrapolated += 1;
        }
        report.evaluated.push(spline.eval_derivative(xq, cfg.derivative)?);
    }

    Ok(report)
}
