//! IAU 2000B nutation in longitude.
//!
//! Computes `Δψ`, the nutation in ecliptic longitude, from the five
//! fundamental arguments and the truncated series in
//! [`crate::data::nutation_terms`]. Obliquity nutation is not computed —
//! the calendar only ever needs longitude.

use crate::angles::ASEC2RAD;
use crate::data::nutation_terms::{NUTATION_TERMS, PLANETARY_CONSTANT_ASEC};
use crate::time::JD2000;

/// Computes `Δψ` in radians for a Julian Date in Terrestrial Time. This is
/// always a small signed quantity (tens of arcsec at most) — callers add it
/// directly to a longitude and normalise the sum, rather than normalising
/// it on its own.
///
/// # Example
///
/// ```
/// use chinese_lunar::nutation::delta_psi;
///
/// // At J2000.0 the nutation in longitude is a few to tens of arcseconds.
/// let dpsi = delta_psi(2451545.0);
/// assert!(dpsi.abs() < 0.0001);
/// ```
pub fn delta_psi(jd_tt: f64) -> f64 {
    let t = (jd_tt - JD2000) / 36525.0;

    let l = (485868.249036 + t * 1717915923.2178) * ASEC2RAD;
    let l_prime = (1287104.79305 + t * 129596581.0481) * ASEC2RAD;
    let f = (335779.526232 + t * 1739527262.8478) * ASEC2RAD;
    let d = (1072260.70369 + t * 1602961601.2090) * ASEC2RAD;
    let omega = (450160.398036 - t * 6962890.5431) * ASEC2RAD;

    let mut dpsi_e7 = 0.0; // accumulated in 1e-7 arcsec
    for term in NUTATION_TERMS {
        let arg = term.m1 as f64 * l
            + term.m2 as f64 * l_prime
            + term.m3 as f64 * f
            + term.m4 as f64 * d
            + term.m5 as f64 * omega;
        dpsi_e7 += (term.s + term.s_t * t) * arg.sin() + term.c_prime * arg.cos();
    }

    let dpsi_asec = dpsi_e7 * 1e-7 + PLANETARY_CONSTANT_ASEC;
    dpsi_asec * ASEC2RAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_at_j2000() {
        let dpsi = delta_psi(JD2000);
        let arcsec = dpsi / ASEC2RAD;
        assert!(arcsec.abs() < 30.0, "{arcsec}");
    }

    #[test]
    fn varies_with_time() {
        let a = delta_psi(JD2000);
        let b = delta_psi(JD2000 + 3650.0);
        assert!((a - b).abs() > 1e-8);
    }
}
