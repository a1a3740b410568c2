//! Elementwise helpers over `f64` slices.
//!
//! - [`arange`]           : evenly spaced grid, end point excluded
//! - [`map_in_place`]     : `xs[i] = f(xs[i])`, sequential
//! - [`par_map_in_place`] : same through rayon (feature `parallel`)
//!
//! The parallel map returns only after every element has been written
//! exactly once. There is no cancellation; callers needing a deadline
//! must impose it around the call.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// `n` points starting at `start` with step `(stop - start) / n`.
///
/// `stop` itself is excluded; `n == 0` gives an empty vector.
pub fn arange(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let h = (stop - start) / n as f64;
    (0..n).map(|i| start + i as f64 * h).collect()
}

/// Replaces every element with `f(element)`, front to back.
#[inline]
pub fn map_in_place<F>(xs: &mut [f64], mut f: F)
where F: FnMut(f64) -> f64 {
    for x in xs.iter_mut() {
        *x = f(*x);
    }
}

/// Replaces every element with `f(element)` on the rayon pool.
#[cfg(feature = "parallel")]
#[inline]
pub fn par_map_in_place<F>(xs: &mut [f64], f: F)
where F: Fn(f64) -> f64 + Sync {
    xs.par_iter_mut().for_each(|x| *x = f(*x));
}
