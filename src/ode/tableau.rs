//! Butcher tableau of the Cash-Karp embedded 4(5) pair.

pub(crate) const STAGES: usize = 6;

/// Stage abscissae `c_s`.
pub(crate) const C: [f64; STAGES] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 3.0 / 5.0, 1.0, 7.0 / 8.0];

/// Stage coupling `a_sm`, row `s` uses columns `0..s`.
pub(crate) const A: [[f64; STAGES - 1]; STAGES] = [
    [0.0,              0.0,          0.0,            0.0,               0.0],
    [1.0 / 5.0,        0.0,          0.0,            0.0,               0.0],
    [3.0 / 40.0,       9.0 / 40.0,   0.0,            0.0,               0.0],
    [3.0 / 10.0,      -9.0 / 10.0,   6.0 / 5.0,      0.0,               0.0],
    [-11.0 / 54.0,     5.0 / 2.0,   -70.0 / 27.0,    35.0 / 27.0,       0.0],
    [1631.0 / 55296.0, 175.0 / 512.0, 575.0 / 13824.0, 44275.0 / 110592.0, 253.0 / 4096.0],
];

/// Fifth-order weights; the step advances with these.
pub(crate) const B5: [f64; STAGES] = [
    37.0 / 378.0, 0.0, 250.0 / 621.0, 125.0 / 594.0, 0.0, 512.0 / 1771.0,
];

/// Embedded fourth-order weights; only used for the error estimate.
pub(crate) const B4: [f64; STAGES] = [
    2825.0 / 27648.0, 0.0, 18575.0 / 48384.0, 13525.0 / 55296.0, 277.0 / 14336.0, 1.0 / 4.0,
];
