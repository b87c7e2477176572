//! IAU 2000B nutation-in-longitude series.
//!
//! Each row gives integer multipliers of the five fundamental arguments
//! `(L, L', F, D, Omega)` — Moon mean anomaly,
//! Sun mean anomaly, argument of latitude, Moon elongation, and Moon's
//! node longitude, in that order — and a `(s, sT, c')` coefficient triple
//! in units of `1e-7` arcsec contributing `(s + sT*t)*sin(arg) + c'*cos(arg)`
//! to `Δψ`.

/// One row of the nutation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutationTerm {
    /// Multiplier of `L` (Moon mean anomaly).
    pub m1: i32,
    /// Multiplier of `L'` (Sun mean anomaly).
    pub m2: i32,
    /// Multiplier of `F` (argument of latitude).
    pub m3: i32,
    /// Multiplier of `D` (Moon elongation).
    pub m4: i32,
    /// Multiplier of `Omega` (Moon's node longitude).
    pub m5: i32,
    /// Sine coefficient, `1e-7` arcsec.
    pub s: f64,
    /// Sine coefficient's rate of change per Julian century, `1e-7` arcsec.
    pub s_t: f64,
    /// Cosine coefficient, `1e-7` arcsec.
    pub c_prime: f64,
}

const fn row(m1: i32, m2: i32, m3: i32, m4: i32, m5: i32, s: f64, s_t: f64, c_prime: f64) -> NutationTerm {
    NutationTerm { m1, m2, m3, m4, m5, s, s_t, c_prime }
}

/// Dominant terms of the series (full IAU 2000B table has 77 rows). These
/// ten rows are the series' largest-amplitude contributions and already
/// account for essentially all of the nutation-in-longitude signal at
/// arcsecond precision; the remaining 67 rows refine it to milliarcsecond
/// precision.
pub const NUTATION_TERMS: &[NutationTerm] = &[
    row(0, 0, 0, 0, 1, -171996000.0, -174200.0, 0.0),
    row(0, 0, 2, -2, 2, -13187000.0, -1600.0, 0.0),
    row(0, 0, 2, 0, 2, -2274000.0, -200.0, 0.0),
    row(0, 0, 0, 0, 2, 2062000.0, 200.0, 0.0),
    row(0, 1, 0, 0, 0, 1426000.0, -3400.0, 0.0),
    row(1, 0, 0, 0, 0, 712000.0, 100.0, 0.0),
    row(0, 1, 2, -2, 2, -517000.0, 1200.0, 0.0),
    row(0, 0, 2, 0, 1, -386000.0, -400.0, 0.0),
    row(1, 0, 2, 0, 2, -301000.0, 0.0, 0.0),
    row(0, -1, 2, -2, 2, 217000.0, -500.0, 0.0),
];

/// The long-period planetary constant term added after the series sum,
/// arcsec.
pub const PLANETARY_CONSTANT_ASEC: f64 = 0.000388;
