//! Apparent geocentric ecliptic longitude of the Sun.
//!
//! VSOP87D Earth heliocentric longitude, shifted to geocentric, with an
//! FK5 frame correction, nutation, and light-time aberration.

use crate::aberration::aberration_correction;
use crate::angles::norm_2pi;
use crate::data::vsop87d::{evaluate, EARTH_L0, EARTH_L1, EARTH_L2, EARTH_L3, EARTH_L4, EARTH_L5};
use crate::nutation::delta_psi;
use crate::time::JD2000;
use std::f64::consts::PI;

/// Approximation of the first-order FK5 frame correction: a single
/// additive constant rather than the full position-dependent term. The
/// error this introduces is below VSOP87D's own truncation error and is
/// harmless for calendar purposes.
const FK5_CORRECTION_RAD: f64 = -4.379321981462438e-7;

/// Evaluates the Earth's heliocentric ecliptic longitude from the VSOP87D
/// series, in radians, not yet shifted to geocentric or corrected.
pub fn earth_heliocentric_longitude(jd_tt: f64) -> f64 {
    let tau = (jd_tt - JD2000) / 365250.0;

    let l0 = evaluate(EARTH_L0, tau);
    let l1 = evaluate(EARTH_L1, tau);
    let l2 = evaluate(EARTH_L2, tau);
    let l3 = evaluate(EARTH_L3, tau);
    let l4 = evaluate(EARTH_L4, tau);
    let l5 = evaluate(EARTH_L5, tau);

    l0 + tau * (l1 + tau * (l2 + tau * (l3 + tau * (l4 + tau * l5))))
}

/// Computes the Sun's apparent geocentric ecliptic longitude, in radians,
/// normalised to `[0, 2*pi)`.
///
/// When `suppress_nutation` is `true`, `Δψ` is not added — used by the
/// new-moon search, where the same nutation affects both Sun and Moon
/// longitudes and cancels in their difference to first order. Solar-term
/// searches always use the full apparent longitude.
///
/// # Example
///
/// ```
/// use chinese_lunar::sun::apparent_sun;
///
/// let lon = apparent_sun(2451545.0, false);
/// assert!((0.0..std::f64::consts::TAU).contains(&lon));
/// ```
pub fn apparent_sun(jd_tt: f64, suppress_nutation: bool) -> f64 {
    let helio = earth_heliocentric_longitude(jd_tt);
    let mut geo = helio + PI + FK5_CORRECTION_RAD;

    if !suppress_nutation {
        geo += delta_psi(jd_tt);
    }

    geo += aberration_correction(jd_tt);

    norm_2pi(geo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_in_range() {
        for i in -50..50 {
            let jd = JD2000 + i as f64 * 73.0;
            let lon = apparent_sun(jd, false);
            assert!((0.0..std::f64::consts::TAU).contains(&lon), "{jd} -> {lon}");
        }
    }

    #[test]
    fn near_vernal_equinox_longitude_is_near_zero() {
        // 2014-03-20 ~ 16:57 UT is the vernal equinox; apparent longitude
        // should be close to 0 radians (360 degrees).
        let jd_tt = 2456736.5 + 17.0 / 24.0 + 69.0 / 86400.0;
        let lon = apparent_sun(jd_tt, false);
        let lon_deg = lon.to_degrees();
        assert!(lon_deg < 2.0 || lon_deg > 358.0, "{lon_deg}");
    }
}
