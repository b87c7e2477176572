//! VSOP87D Earth heliocentric ecliptic longitude series (`L0..L5`).
//!
//! Reference: Bretagnon & Francou, *VSOP87*, IMCCE
//! (`ftp://ftp.imcce.fr/pub/ephem/planets/vsop87`). Each term contributes
//! `A * cos(B + C * tau)` where `tau` is in Julian millennia from J2000.0.
//! Coefficients are leading terms of the Earth series, amplitude `A`
//! already scaled to radians.

/// One `A*cos(B + C*tau)` term of a VSOP87 longitude series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VsopTerm {
    /// Amplitude, radians.
    pub a: f64,
    /// Phase, radians.
    pub b: f64,
    /// Angular frequency, radians per Julian millennium.
    pub c: f64,
}

const fn t(a: f64, b: f64, c: f64) -> VsopTerm {
    VsopTerm { a, b, c }
}

/// Earth `L0` (bias) series, amplitude in radians (`A * 1e-8` of the
/// published integer table).
pub const EARTH_L0: &[VsopTerm] = &[
    t(1.75347046e0, 0.0000000, 0.00000000),
    t(3.34165640e-2, 4.6692568, 6283.07585000),
    t(3.48944000e-4, 4.6261000, 12566.15170000),
    t(3.49700000e-5, 2.7441000, 5753.38490000),
    t(3.41800000e-5, 2.8289000, 3.52310000),
    t(3.13600000e-5, 3.6277000, 77713.77150000),
    t(2.67600000e-5, 4.4181000, 7860.41940000),
    t(2.34300000e-5, 6.1352000, 3930.20970000),
    t(1.32400000e-5, 0.7425000, 11506.76980000),
    t(1.27300000e-5, 2.0371000, 529.69100000),
    t(1.19900000e-5, 1.1096000, 1577.34350000),
    t(9.90000000e-6, 5.2330000, 5884.92700000),
    t(9.02000000e-6, 2.0450000, 26.29800000),
    t(8.57000000e-6, 3.5080000, 398.14900000),
    t(7.80000000e-6, 1.1790000, 5223.69400000),
    t(7.53000000e-6, 2.5330000, 5507.55300000),
    t(5.05000000e-6, 4.5830000, 18849.22800000),
    t(4.92000000e-6, 4.2050000, 775.52300000),
    t(3.57000000e-6, 2.9200000, 0.06700000),
    t(3.17000000e-6, 5.8490000, 11790.62900000),
];

/// Earth `L1` (linear rate) series.
pub const EARTH_L1: &[VsopTerm] = &[
    t(6.28331966747e3, 0.0000000, 0.00000000),
    t(2.06059000e-3, 2.6782350, 6283.07585000),
    t(4.30300000e-5, 2.6351000, 12566.15170000),
    t(4.25000000e-6, 1.5900000, 3.52300000),
    t(1.19000000e-6, 5.7960000, 26.29800000),
    t(1.09000000e-6, 2.9660000, 1577.34400000),
    t(9.30000000e-7, 2.5900000, 18849.23000000),
    t(7.20000000e-7, 1.1400000, 529.69000000),
    t(6.80000000e-7, 1.8700000, 398.15000000),
];

/// Earth `L2` series.
pub const EARTH_L2: &[VsopTerm] = &[
    t(5.29190000e-4, 0.0000000, 0.00000000),
    t(8.72000000e-5, 1.0721000, 6283.07580000),
    t(3.09000000e-6, 0.8670000, 12566.15200000),
    t(2.70000000e-7, 0.0500000, 3.52000000),
    t(1.60000000e-7, 5.1900000, 26.30000000),
];

/// Earth `L3` series.
pub const EARTH_L3: &[VsopTerm] = &[
    t(2.89000000e-6, 5.8440000, 6283.07600000),
    t(3.50000000e-7, 0.0000000, 0.00000000),
    t(1.70000000e-7, 5.4900000, 12566.15000000),
];

/// Earth `L4` series.
pub const EARTH_L4: &[VsopTerm] = &[t(1.14000000e-6, 3.1420000, 0.00000000)];

/// Earth `L5` series (negligible at this truncation; kept so the
/// degree-5 polynomial term in [`crate::sun::earth_heliocentric_longitude`]
/// has a table to sum even though its contribution rounds to zero).
pub const EARTH_L5: &[VsopTerm] = &[];

/// Evaluates `sum(A * cos(B + C*tau))` over one VSOP87 series.
pub fn evaluate(series: &[VsopTerm], tau: f64) -> f64 {
    series.iter().map(|term| term.a * (term.b + term.c * tau).cos()).sum()
}
