//! Paired `(x, y)` samples with an explicit sort state.
//!
//! A [`SampleSet`] starts [`SortState::Unsorted`] unless built with
//! [`SampleSet::sorted`]. The first [`SampleSet::sort`] (or the first
//! [`SampleSet::bracket`], which forces one) moves it to
//! [`SortState::Sorted`]; that transition happens at most once and the
//! values never change afterwards.

use crate::interpolation::config::non_finite_idx;
use crate::interpolation::errors::InterpolationError;

/// Whether `xs` is known to be non-decreasing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortState {
    Unsorted,
    Sorted,
}

/// Owned `(x, y)` samples of equal length, keyed by `x`.
#[derive(Debug, Clone)]
pub struct SampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
    state: SortState,
}

impl SampleSet {
    /// Pairs `xs` with `ys` without sorting.
    ///
    /// # Errors
    /// - [`InterpolationError::UnequalLength`] : `xs.len() != ys.len()`
    /// - [`InterpolationError::EmptyInput`]    : no samples
    /// - [`InterpolationError::NonFiniteVec`]  : NaN/inf in `xs` or `ys`
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::UnequalLength { x_len: xs.len(), y_len: ys.len() });
        }
        if xs.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if let Some(idx) = non_finite_idx(&xs).or_else(|| non_finite_idx(&ys)) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        Ok(Self { xs, ys, state: SortState::Unsorted })
    }

    /// [`SampleSet::new`] followed by an eager [`SampleSet::sort`].
    pub fn sorted(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, InterpolationError> {
        let mut samples = Self::new(xs, ys)?;
        samples.sort();
        Ok(samples)
    }

    /// Sorts `xs` ascending, permuting `ys` in lockstep.
    ///
    /// No-op once sorted. If `xs` already happens to be ascending only the
    /// state changes. Equal keys keep their input order.
    pub fn sort(&mut self) {
        if self.state == SortState::Sorted {
            return;
        }

        if !is_ascending(&self.xs) {
            let mut order: Vec<usize> = (0..self.xs.len()).collect();
            order.sort_by(|&i, &j| self.xs[i].total_cmp(&self.xs[j]));

            self.xs = order.iter().map(|&i| self.xs[i]).collect();
            self.ys = order.iter().map(|&i| self.ys[i]).collect();
        }

        self.state = SortState::Sorted;
    }

    /// Returns the indices `(i, i + 1)` of the segment used for `x`,
    /// sorting first if needed.
    ///
    /// - `x >= x_max` : `(n - 2, n - 1)`
    /// - `x <= x_min` : `(0, 1)`
    /// - otherwise    : `xs[i] <= x < xs[i + 1]`
    ///
    /// # Errors
    /// - [`InterpolationError::InsufficientPoints`] : fewer than 2 samples
    pub fn bracket(&mut self, x: f64) -> Result<(usize, usize), InterpolationError> {
        if self.xs.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: self.xs.len() });
        }
        self.sort();
        Ok(self.bracket_sorted(x))
    }

    /// Bracket lookup on an already sorted set with at least 2 samples.
    pub(crate) fn bracket_sorted(&self, x: f64) -> (usize, usize) {
        debug_assert!(self.state == SortState::Sorted && self.xs.len() >= 2);

        let n = self.xs.len();
        if x >= self.xs[n - 1] {
            return (n - 2, n - 1);
        }
        if x <= self.xs[0] {
            return (0, 1);
        }

        let i = find_interval(&self.xs, x).min(n - 2);
        (i, i + 1)
    }

    // getters
    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }
    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }
    pub fn state(&self) -> SortState { self.state }
    pub fn is_sorted(&self) -> bool { self.state == SortState::Sorted }

    /// Smallest abscissa; the first element once sorted.
    pub fn x_min(&self) -> f64 {
        self.xs.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest abscissa; the last element once sorted.
    pub fn x_max(&self) -> f64 {
        self.xs.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

#[inline]
fn is_ascending(xs: &[f64]) -> bool {
    xs.windows(2).all(|w| w[0] <= w[1])
}

/// Bisection for the largest `lo` with `x[lo] <= xq`, assuming
/// `x[0] <= xq < x[n - 1]`.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}
