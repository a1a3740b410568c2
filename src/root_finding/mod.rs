// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;

// algorithms
pub mod brent;
