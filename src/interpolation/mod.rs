pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod samples;
pub mod traits;
pub use samples::SampleSet;
pub use traits::Interpolator;

pub mod spline;
pub use spline::natural::CubicSpline;
