pub mod natural;
pub mod tridiagonal;
