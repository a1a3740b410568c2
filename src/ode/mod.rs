// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub(crate) mod tableau;

// algorithms
pub mod cash_karp;
