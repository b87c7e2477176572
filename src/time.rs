//! Time-scale conversions: Gregorian/Julian civil dates to/from Julian
//! Date, the NASA/Espenak ΔT polynomial, and TT/UT/civil-date bridging.
//!
//! This module works entirely in plain `f64`/`i32` arithmetic rather
//! than `chrono`, because it has to correctly represent the Julian
//! calendar before 1582-10-15 and civil years down to -1999 — neither of
//! which `chrono::NaiveDate` (always proleptic Gregorian) models. The
//! public calendar API in [`crate::calendar`] converts the results to
//! `chrono::NaiveDate` once it's safely within the modern civil-year
//! range the caller actually asked for.

/// Julian Date of the J2000.0 epoch.
pub const JD2000: f64 = 2451545.0;

/// Converts a civil (Julian before 1582-10-15, Gregorian from then on)
/// calendar date to a Julian Date, using Meeus' algorithm
/// (*Astronomical Algorithms*, 2nd ed., Ch. 7).
///
/// Dates in the nonexistent Gregorian-reform gap (1582-10-05 through
/// 1582-10-14) snap to 1582-10-15.
///
/// # Example
///
/// ```
/// use chinese_lunar::time::gregorian_to_jd;
///
/// assert!((gregorian_to_jd(2000, 1, 1.5) - 2451545.0).abs() < 1e-9);
/// // a date inside the Gregorian-reform gap snaps to 1582-10-15
/// assert_eq!(gregorian_to_jd(1582, 10, 10.0), gregorian_to_jd(1582, 10, 15.0));
/// ```
pub fn gregorian_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 { (year - 1, month + 12) } else { (year, month) };

    let on_or_after_switch = (year, month, day) >= (1582, 10, 15.0);
    let on_or_before_julian_end = (year, month, day) <= (1582, 10, 4.999999999);

    let b = if on_or_after_switch {
        let a = (y as f64 / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else if on_or_before_julian_end {
        0.0
    } else {
        return gregorian_to_jd(1582, 10, 15.0);
    };

    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}

/// Converts a Julian Date back to a civil calendar date, using Meeus'
/// inverse algorithm. `day` carries the fraction of the day.
///
/// # Example
///
/// ```
/// use chinese_lunar::time::{gregorian_to_jd, jd_to_gregorian};
///
/// let (y, m, d) = jd_to_gregorian(gregorian_to_jd(2024, 8, 4.25));
/// assert_eq!((y, m), (2024, 8));
/// assert!((d - 4.25).abs() < 1e-9);
/// ```
pub fn jd_to_gregorian(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = if z < 2299161.0 {
        z
    } else {
        let alpha = ((z - 1867216.25) / 36524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Returns ΔT = TT - UT in seconds, using the NASA/Espenak & Meeus
/// polynomial fit (valid -1999..+3000). Outside that range the engine
/// still computes a value (callers may reject it as `OutOfRange`);
/// precision is simply not guaranteed there.
///
/// `year` is taken as `y + (month - 0.5)/12`.
///
/// # Example
///
/// ```
/// use chinese_lunar::time::delta_t;
///
/// assert!((delta_t(2000, 1) - 64.0).abs() < 2.0);
/// assert!((delta_t(500, 1) - 5706.0).abs() < 20.0);
/// ```
pub fn delta_t(year: i32, month: u32) -> f64 {
    let y = year as f64 + (month as f64 - 0.5) / 12.0;

    if y < -500.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if y < 500.0 {
        let u = y / 100.0;
        let u2 = u * u;
        let u3 = u2 * u;
        let u4 = u3 * u;
        let u5 = u4 * u;
        let u6 = u5 * u;
        10583.6 - 1014.41 * u + 33.78311 * u2 - 5.952053 * u3 - 0.1798452 * u4
            + 0.022174192 * u5
            + 0.0090316521 * u6
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        let u2 = u * u;
        let u3 = u2 * u;
        let u4 = u3 * u;
        let u5 = u4 * u;
        let u6 = u5 * u;
        1574.2 - 556.01 * u + 71.23472 * u2 + 0.319781 * u3 - 0.8503463 * u4
            - 0.005050998 * u5
            + 0.0083572073 * u6
    } else if y < 1700.0 {
        let u = y - 1600.0;
        120.0 - 0.9808 * u - 0.01532 * u * u + u.powi(3) / 7129.0
    } else if y < 1800.0 {
        let u = y - 1700.0;
        8.83 + 0.1603 * u - 0.0059285 * u * u + 0.00013336 * u.powi(3) - u.powi(4) / 1174000.0
    } else if y < 1860.0 {
        let u = y - 1800.0;
        13.72 - 0.332447 * u + 0.0068612 * u.powi(2) + 0.0041116 * u.powi(3)
            - 0.00037436 * u.powi(4)
            + 0.0000121272 * u.powi(5)
            - 0.0000001699 * u.powi(6)
            + 0.000000000875 * u.powi(7)
    } else if y < 1900.0 {
        let u = y - 1860.0;
        7.62 + 0.5737 * u - 0.251754 * u.powi(2) + 0.01680668 * u.powi(3)
            - 0.0004473624 * u.powi(4)
            + u.powi(5) / 233174.0
    } else if y < 1920.0 {
        let u = y - 1900.0;
        -2.79 + 1.494119 * u - 0.0598939 * u.powi(2) + 0.0061966 * u.powi(3)
            - 0.000197 * u.powi(4)
    } else if y < 1941.0 {
        let u = y - 1920.0;
        21.20 + 0.84493 * u - 0.076100 * u.powi(2) + 0.0020936 * u.powi(3)
    } else if y < 1961.0 {
        let u = y - 1950.0;
        29.07 + 0.407 * u - u.powi(2) / 233.0 + u.powi(3) / 2547.0
    } else if y < 1986.0 {
        let u = y - 1975.0;
        45.45 + 1.067 * u - u.powi(2) / 260.0 - u.powi(3) / 718.0
    } else if y < 2005.0 {
        let u = y - 2000.0;
        63.86 + 0.3345 * u - 0.060374 * u.powi(2) + 0.0017275 * u.powi(3)
            + 0.000651814 * u.powi(4)
            + 0.00002373599 * u.powi(5)
    } else if y < 2050.0 {
        let u = y - 2000.0;
        62.92 + 0.32217 * u + 0.005589 * u * u
    } else if y < 2150.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Converts a Julian Date in Terrestrial Time to a Julian Date in
/// Universal Time, using ΔT evaluated at the JD's own (approximate)
/// civil year/month.
pub fn jd_tt_to_jd_ut(jd_tt: f64) -> f64 {
    let (y, m, _) = jd_to_gregorian(jd_tt);
    jd_tt - delta_t(y, m) / 86400.0
}

/// Converts a Julian Date in Terrestrial Time to a civil Julian Date in
/// the given timezone: `jd_ut + tz_hours/24`.
///
/// # Example
///
/// ```
/// use chinese_lunar::time::jd_tt_to_civil;
///
/// let civil = jd_tt_to_civil(2451545.0, 8.0);
/// assert!(civil > 2451545.0);
/// ```
pub fn jd_tt_to_civil(jd_tt: f64, tz_hours: f64) -> f64 {
    jd_tt_to_jd_ut(jd_tt) + tz_hours / 24.0
}

/// Normalises a JDTT instant to the Julian Date of civil midnight in the
/// given timezone, using direct arithmetic in place of the fragile
/// format-then-reparse round trip: `floor(jd_ut + tz/24 - 0.5) + 0.5`.
///
/// # Example
///
/// ```
/// use chinese_lunar::time::civil_midnight_jd;
///
/// let midnight = civil_midnight_jd(2451545.0, 8.0);
/// assert_eq!(midnight.fract(), 0.5);
/// ```
pub fn civil_midnight_jd(jd_tt: f64, tz_hours: f64) -> f64 {
    let jd_ut = jd_tt_to_jd_ut(jd_tt);
    (jd_ut + tz_hours / 24.0 - 0.5).floor() + 0.5
}

/// How much of a civil timestamp [`format_civil`] should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePrecision {
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DD HH:MM`
    Minute,
    /// `YYYY-MM-DD HH:MM:SS`
    Second,
}

/// Formats a JDTT instant as a civil date/time string in the given
/// timezone, at the requested precision.
///
/// Rounding is done on the Julian Date itself before re-deriving calendar
/// fields, so a value that rounds up to the next day (including a
/// `23:59:60` leap-second carry) falls out with no special casing.
///
/// # Example
///
/// ```
/// use chinese_lunar::time::{delta_t, format_civil, gregorian_to_jd, TimePrecision};
///
/// // gregorian_to_jd gives midnight TT; add delta_t back to land on
/// // midnight UT so the civil date prints as expected.
/// let jd = gregorian_to_jd(2024, 1, 1.0) + delta_t(2024, 1) / 86400.0;
/// assert_eq!(format_civil(jd, 0.0, TimePrecision::Date), "2024-01-01");
/// ```
pub fn format_civil(jd_tt: f64, tz_hours: f64, precision: TimePrecision) -> String {
    let jd_civil = jd_tt_to_civil(jd_tt, tz_hours);

    let unit_days = match precision {
        TimePrecision::Date => 1.0,
        TimePrecision::Minute => 1.0 / 1440.0,
        TimePrecision::Second => 1.0 / 86400.0,
    };
    let rounded = (jd_civil / unit_days).round() * unit_days;

    let (y, m, d) = jd_to_gregorian(rounded);
    let day_int = d.floor() as u32;
    let frac = d - day_int as f64;
    let total_seconds = (frac * 86400.0).round() as i64;
    let hh = total_seconds / 3600;
    let mm = (total_seconds / 60) % 60;
    let ss = total_seconds % 60;

    match precision {
        TimePrecision::Date => format!("{y:04}-{m:02}-{day_int:02}"),
        TimePrecision::Minute => format!("{y:04}-{m:02}-{day_int:02} {hh:02}:{mm:02}"),
        TimePrecision::Second => format!("{y:04}-{m:02}-{day_int:02} {hh:02}:{mm:02}:{ss:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn round_trip_after_gregorian_reform() {
        let cases = [(2024, 8, 4.25), (1987, 1, 27.0), (1600, 12, 31.0), (2000, 1, 1.5)];
        for (y, m, d) in cases {
            let jd = gregorian_to_jd(y, m, d);
            let (ry, rm, rd) = jd_to_gregorian(jd);
            assert_eq!((y, m), (ry, rm));
            assert_abs_diff_eq!(d, rd, epsilon = 1e-6);
        }
    }

    #[test]
    fn gregorian_reform_gap_snaps_forward() {
        let snapped = gregorian_to_jd(1582, 10, 15.0);
        for d in 5..15 {
            assert_eq!(gregorian_to_jd(1582, 10, d as f64), snapped);
        }
    }

    #[test]
    fn delta_t_smoke_values() {
        assert_abs_diff_eq!(delta_t(2000, 1), 64.0, epsilon = 2.0);
        assert_abs_diff_eq!(delta_t(1900, 1), -2.1, epsilon = 1.0);
        assert_abs_diff_eq!(delta_t(500, 1), 5706.0, epsilon = 20.0);
    }

    #[test]
    fn format_civil_precisions() {
        let jd = gregorian_to_jd(2014, 3, 21.0) + 2.0 / 24.0;
        let s = format_civil(jd, 0.0, TimePrecision::Date);
        assert_eq!(s, "2014-03-21");
        let s = format_civil(jd, 0.0, TimePrecision::Minute);
        assert!(s.starts_with("2014-03-21 02:"));
    }

    #[test]
    fn civil_midnight_is_always_half_fraction() {
        for i in 0..20 {
            let jd = JD2000 + i as f64 * 31.0;
            let mid = civil_midnight_jd(jd, 8.0);
            assert_abs_diff_eq!(mid.fract(), 0.5, epsilon = 1e-9);
        }
    }
}
