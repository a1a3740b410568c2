//! Numerical building blocks with runtime error control.
//!
//! - [`interpolation`]   : sorted sample sets and natural cubic splines
//! - [`quadrature`]      : composite trapezoid rule and Romberg integration
//! - [`ode`]             : adaptive Cash-Karp Runge-Kutta integration
//! - [`root_finding`]    : bracketing root search with Brent's method
//! - [`differentiation`] : Richardson-extrapolated central differences
//! - [`elementwise`]     : grids and (optionally parallel) in-place maps
//!
//! Every iterative routine returns a report stating why it stopped.
//! Running out of refinement budget is reported there, not as an error;
//! invalid input is rejected with a module-specific error type.

pub mod differentiation;
pub mod elementwise;
pub mod interpolation;
pub mod ode;
pub mod quadrature;
pub(crate) mod richardson;
pub mod root_finding;
