//! Apparent geocentric ecliptic longitude of the Moon.
//!
//! The LEA-406 long-term harmonic lunar ephemeris: a polynomial
//! mean-longitude term plus a harmonic sum over
//! [`crate::data::lea406_terms`], each row contributing an amplitude that
//! itself varies with `t/10` and `(t/10)^2`.

use crate::angles::{norm_2pi, ASEC2RAD};
use crate::data::lea406_terms;
use crate::nutation::delta_psi;
use crate::time::JD2000;

/// Moon mean-longitude polynomial coefficients, arcsec.
const V0: [f64; 5] = [785939.924268, 1732564372.3047, -5.279, 0.006665, -5.522e-5];

/// Computes the Moon's apparent geocentric ecliptic longitude, in radians,
/// normalised to `[0, 2*pi)`.
///
/// When `suppress_nutation` is `true`, `Δψ` is not added — used by the
/// new-moon search, matching [`crate::sun::apparent_sun`]'s
/// `suppress_nutation` contract.
///
/// # Example
///
/// ```
/// use chinese_lunar::moon::apparent_moon;
///
/// let lon = apparent_moon(2451545.0, false);
/// assert!((0.0..std::f64::consts::TAU).contains(&lon));
/// ```
pub fn apparent_moon(jd_tt: f64, suppress_nutation: bool) -> f64 {
    let t = (jd_tt - JD2000) / 36525.0;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let tm = t / 10.0;
    let tm2 = tm * tm;

    let mut v_asec = V0[0] + t * (V0[1] + t * (V0[2] + t * (V0[3] + t * V0[4])));

    for term in lea406_terms::radians() {
        let arg = (term.f0 + term.f1 * t + term.f2 * t2 + term.f3 * t3 + term.f4 * t4) * ASEC2RAD;
        v_asec += term.a * (arg + term.c).sin()
            + term.at * (arg + term.ct).sin() * tm
            + term.att * (arg + term.ctt).sin() * tm2;
    }

    let mut v = v_asec * ASEC2RAD;
    if !suppress_nutation {
        v += delta_psi(jd_tt);
    }

    norm_2pi(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_in_range() {
        for i in -50..50 {
            let jd = JD2000 + i as f64 * 10.0;
            let lon = apparent_moon(jd, false);
            assert!((0.0..std::f64::consts::TAU).contains(&lon), "{jd} -> {lon}");
        }
    }

    #[test]
    fn moves_about_13_degrees_a_day() {
        let a = apparent_moon(JD2000, true);
        let b = apparent_moon(JD2000 + 1.0, true);
        let mut delta = (b - a).to_degrees();
        if delta < 0.0 {
            delta += 360.0;
        }
        assert!((8.0..18.0).contains(&delta), "{delta}");
    }
}
