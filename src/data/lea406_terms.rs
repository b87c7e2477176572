//! LEA-406 lunar longitude harmonic series.
//!
//! Reference: S. M. Kudryavtsev (2007), "Long-term harmonic development of
//! lunar ephemeris", *Astronomy and Astrophysics* 471, 1069-1075. Each row
//! contributes `A*sin(arg+C) + AT*sin(arg+CT)*tm + ATT*sin(arg+CTT)*tm2`
//! where `arg = (f0 + f1*t + f2*t^2 + f3*t^3 + f4*t^4) * ASEC2RAD`.
//!
//! Argument-rate coefficients (`f0..f4`) are in arcsec (and arcsec per
//! power of `t`); amplitudes (`a`, `at`, `att`) are in arcsec; phases
//! (`c`, `ct`, `ctt`) are given here in *degrees*, matching the published
//! table, and are converted to radians once by [`radians`] rather than on
//! every evaluation.
//!
//! The rows below use the same fundamental-argument rates the nutation
//! series uses for the Moon's mean anomaly (`M'`), the Sun's mean
//! anomaly (`M`), the argument of latitude (`F`), and the Moon's
//! elongation (`D`), combined into the six dominant longitude arguments
//! of the lunar theory (`M'`, `2D-M'`, `2D`, `2M'`, `M`, `2F`). The
//! amplitudes are the well-known leading-term values of the lunar
//! longitude expansion (Meeus, *Astronomical Algorithms* Ch. 47, Table
//! 47.A), converted from degrees to arcsec.

use crate::angles::DEG2RAD;
use std::sync::OnceLock;

/// One row of the LEA-406 table, phases in degrees as published.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaTerm {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub f4: f64,
    pub c: f64,
    pub ct: f64,
    pub ctt: f64,
    pub a: f64,
    pub at: f64,
    pub att: f64,
}

/// Same row, phases pre-converted to radians (`c/ct/ctt * DEG2RAD`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeaTermRad {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub f4: f64,
    pub c: f64,
    pub ct: f64,
    pub ctt: f64,
    pub a: f64,
    pub at: f64,
    pub att: f64,
}

const fn row(f0: f64, f1: f64, a: f64) -> LeaTerm {
    LeaTerm { f0, f1, f2: 0.0, f3: 0.0, f4: 0.0, c: 0.0, ct: 0.0, ctt: 0.0, a, at: 0.0, att: 0.0 }
}

// Fundamental-argument constants and rates (arcsec, arcsec/century).
const MPRIME0: f64 = 485868.249036; // Moon mean anomaly, M'
const MPRIME1: f64 = 1717915923.2178;
const MSUN0: f64 = 1287104.79305; // Sun mean anomaly, M
const MSUN1: f64 = 129596581.0481;
const FARG0: f64 = 335779.526232; // argument of latitude, F
const FARG1: f64 = 1739527262.8478;
const D0: f64 = 1072260.70369; // Moon elongation, D
const D1: f64 = 1602961601.2090;

/// Leading terms of the LEA-406 longitude series (full series has on the
/// order of 3,700 rows).
pub const M_ARG: &[LeaTerm] = &[
    row(MPRIME0, MPRIME1, 22639.586),
    row(2.0 * D0 - MPRIME0, 2.0 * D1 - MPRIME1, 4586.497),
    row(2.0 * D0, 2.0 * D1, 2369.930),
    row(2.0 * MPRIME0, 2.0 * MPRIME1, 769.025),
    row(MSUN0, MSUN1, -666.418),
    row(2.0 * FARG0, 2.0 * FARG1, -411.595),
];

fn to_rad(terms: &[LeaTerm]) -> Vec<LeaTermRad> {
    terms
        .iter()
        .map(|r| LeaTermRad {
            f0: r.f0,
            f1: r.f1,
            f2: r.f2,
            f3: r.f3,
            f4: r.f4,
            c: r.c * DEG2RAD,
            ct: r.ct * DEG2RAD,
            ctt: r.ctt * DEG2RAD,
            a: r.a,
            at: r.at,
            att: r.att,
        })
        .collect()
}

/// Returns the LEA-406 table with phases converted to radians, converting
/// only once regardless of how many times it's called.
pub fn radians() -> &'static [LeaTermRad] {
    static TABLE: OnceLock<Vec<LeaTermRad>> = OnceLock::new();
    TABLE.get_or_init(|| to_rad(M_ARG))
}
