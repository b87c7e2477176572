//! Lunar-year assembler and public calendar facade.
//!
//! Given a civil year, this module locates the surrounding new moons and
//! solar terms, finds the Chinese-year boundaries at winter solstice,
//! numbers the lunar months, detects and marks a leap month by the
//! "no zhongqi" rule, and expands the result to one record per civil day.

use std::sync::Mutex;

use chrono::{Datelike, NaiveDate};

use crate::cache::{YearCache, DEFAULT_CAPACITY};
use crate::error::{AstroError, Result};
use crate::events::{enumerate_new_moons, solar_term};
use crate::labels::{day_label, fixed_holiday, is_zhongqi, jieqi_label, month_label};
use crate::time::{civil_midnight_jd, jd_to_gregorian};

/// Beijing is the Chinese calendar's reference timezone.
const BEIJING_TZ_HOURS: f64 = 8.0;

/// Solar-term angles searched per lunar year: -120 deg..270 deg in 15-degree
/// steps, 27 terms.
const SOLAR_TERM_ANGLES: [i32; 27] = [
    -120, -105, -90, -75, -60, -45, -30, -15, 0, 15, 30, 45, 60, 75, 90, 105, 120, 135, 150, 165,
    180, 195, 210, 225, 240, 255, 270,
];

/// New moons enumerated per lunar-year search window.
const NEW_MOONS_PER_WINDOW: usize = 15;

/// One civil day's lunar-calendar record.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    /// The civil (proleptic Gregorian) date.
    pub date: NaiveDate,
    /// `1..=12` for a regular month, `101..=112` for a leap month.
    pub chinese_month_code: i32,
    /// Day-of-month, `1..=30`.
    pub day_of_month: u32,
    /// Display label for the month (e.g. 正月, 閏七月).
    pub month_label: &'static str,
    /// Display label for the day (e.g. 初一).
    pub day_label: &'static str,
    /// The jieqi name, if this day hosts a solar term.
    pub jieqi_label: Option<&'static str>,
    /// The traditional-holiday label, if any.
    pub holiday_label: Option<&'static str>,
}

struct SolarTermEvent {
    jd: f64,
    angle: i32,
}

/// Finds all 27 solar terms for the lunar year seeded near civil year
/// `seed_year`, in raw JDTT (not yet civil-midnight normalised).
fn solar_terms_tt(seed_year: i32) -> Vec<(i32, f64)> {
    SOLAR_TERM_ANGLES.iter().map(|&angle| (angle, solar_term(seed_year, angle))).collect()
}

/// Assembles one lunar year (from the winter solstice preceding `seed_year`'s
/// vernal equinox to the winter solstice following it) into per-day
/// records.
fn assemble_lunar_year(seed_year: i32) -> Result<Vec<CalendarDay>> {
    let terms_tt = solar_terms_tt(seed_year);

    let prev_ws_tt = terms_tt.iter().find(|(a, _)| *a == -90).map(|&(_, jd)| jd).ok_or_else(|| {
        AstroError::CalculationError {
            calculation: "lunar_year_assembly",
            reason: "solar term table missing the -90 degree (previous winter solstice) entry"
                .to_string(),
        }
    })?;

    // Normalise every event time to a Beijing civil midnight JD.
    let terms: Vec<SolarTermEvent> = terms_tt
        .iter()
        .map(|&(angle, jd)| SolarTermEvent { jd: civil_midnight_jd(jd, BEIJING_TZ_HOURS), angle })
        .collect();
    let prev_ws = civil_midnight_jd(prev_ws_tt, BEIJING_TZ_HOURS);
    let this_ws = terms
        .iter()
        .find(|t| t.angle == 270)
        .map(|t| t.jd)
        .ok_or_else(|| AstroError::CalculationError {
            calculation: "lunar_year_assembly",
            reason: "solar term table missing the 270 degree (this winter solstice) entry"
                .to_string(),
        })?;

    // 15 new moons starting 30 days before the previous winter solstice,
    // searched in JDTT.
    let new_moons_tt = enumerate_new_moons(prev_ws_tt - 30.0, NEW_MOONS_PER_WINDOW);
    let moons: Vec<f64> =
        new_moons_tt.iter().map(|&jd| civil_midnight_jd(jd, BEIJING_TZ_HOURS)).collect();

    let lc_start = moons
        .iter()
        .copied()
        .filter(|&jd| jd <= prev_ws)
        .last()
        .ok_or_else(|| AstroError::CalculationError {
            calculation: "lunar_year_assembly",
            reason: "no new moon found at or before the previous winter solstice".to_string(),
        })?;
    let lc_end = this_ws;

    // Number months 11, 12, 13, ... starting at lc_start's new moon.
    let start_index = moons
        .iter()
        .position(|&jd| jd == lc_start)
        .ok_or_else(|| AstroError::CalculationError {
            calculation: "lunar_year_assembly",
            reason: "lc_start new moon not found in its own enumeration".to_string(),
        })?;

    // Trim new moons and solar terms to [lc_start, lc_end].
    let mut months_raw: Vec<(i32, f64)> = Vec::new();
    for (offset, &jd) in moons[start_index..].iter().enumerate() {
        if jd > lc_end {
            break;
        }
        months_raw.push((11 + offset as i32, jd));
    }
    let terms_trimmed: Vec<&SolarTermEvent> =
        terms.iter().filter(|t| t.jd >= lc_start && t.jd <= lc_end).collect();

    let strictly_between = months_raw.len() as i32 - 1;
    let is_leap_year = strictly_between > 12;

    // Assign final month codes, inserting the leap mark at the first
    // zhongqi-free month (scanning forward) when the year is leap, then
    // folding every raw number into 1..=12 (101..=112 for the leap month).
    let mut codes: Vec<i32> = Vec::with_capacity(months_raw.len());
    let mut leap_found = false;
    let mut decrement = 0i32;

    for (i, &(_raw_seq, start_jd)) in months_raw.iter().enumerate() {
        let end_jd = months_raw.get(i + 1).map(|&(_, jd)| jd).unwrap_or(lc_end);
        let raw = 11 + i as i32 - decrement;

        let has_zhongqi = terms_trimmed
            .iter()
            .any(|t| is_zhongqi(t.angle) && t.jd >= start_jd && t.jd < end_jd);

        if is_leap_year && !leap_found && !has_zhongqi {
            let leap_x = raw - 1;
            let leap_x_folded = leap_x.rem_euclid(12);
            let leap_x_folded = if leap_x_folded == 0 { 12 } else { leap_x_folded };
            codes.push(100 + leap_x_folded);
            leap_found = true;
            decrement += 1;
            continue;
        }

        let folded = raw.rem_euclid(12);
        let folded = if folded == 0 { 12 } else { folded };
        codes.push(folded);
    }

    if is_leap_year && !leap_found {
        return Err(AstroError::LeapNotFound { year: seed_year, month_codes: codes });
    }

    // Expand to per-day records across [lc_start, lc_end).
    let mut days = Vec::new();
    let mut day_jd = lc_start;
    while day_jd < lc_end {
        let (month_index, &(_, month_start)) = months_raw
            .iter()
            .enumerate()
            .filter(|(_, &(_, jd))| jd <= day_jd)
            .last()
            .ok_or_else(|| AstroError::CalculationError {
                calculation: "lunar_year_assembly",
                reason: format!("no month interval covers civil day {day_jd}"),
            })?;

        let chinese_month_code = codes[month_index];
        let day_of_month = ((day_jd - month_start).round() as i64 + 1) as u32;

        let angle = terms_trimmed.iter().find(|t| (t.jd - day_jd).abs() < 0.5).map(|t| t.angle);

        let (y, m, d) = jd_to_gregorian(day_jd);
        let date = NaiveDate::from_ymd_opt(y, m, d.round() as u32).ok_or_else(|| {
            AstroError::InvalidDate { reason: format!("could not build a civil date from JD {day_jd}") }
        })?;

        days.push(CalendarDay {
            date,
            chinese_month_code,
            day_of_month,
            month_label: month_label(chinese_month_code).unwrap_or("?"),
            day_label: day_label(day_of_month).unwrap_or("?"),
            jieqi_label: angle.map(jieqi_label),
            holiday_label: fixed_holiday(chinese_month_code, day_of_month),
        });

        day_jd += 1.0;
    }

    apply_derived_holidays(&mut days, &terms_trimmed);

    Ok(days)
}

/// Applies the two holidays that depend on a neighbouring day rather than
/// a fixed (month, day) pair: 除夕 (the day before 春节) and 寒食 (the day
/// before the 清明 solar term).
fn apply_derived_holidays(days: &mut [CalendarDay], terms: &[&SolarTermEvent]) {
    for i in 1..days.len() {
        if days[i].chinese_month_code == 1 && days[i].day_of_month == 1 {
            days[i - 1].holiday_label = Some("除夕");
        }
    }

    if let Some(qingming) = terms.iter().find(|t| t.angle == 15) {
        if let Some(day) = days.iter_mut().find(|d| {
            let (y, m, dd) = jd_to_gregorian(qingming.jd - 1.0);
            NaiveDate::from_ymd_opt(y, m, dd.round() as u32) == Some(d.date)
        }) {
            day.holiday_label = Some("寒食");
        }
    }
}

/// Computes the full per-day calendar for civil year `civil_year`:
/// assembles the lunar years seeded at `civil_year` and `civil_year + 1`
/// (leap-11 in one lunar year belongs civilly to the next), merges by
/// date, and trims to the requested civil year.
fn year_days(civil_year: i32) -> Result<Vec<CalendarDay>> {
    let mut combined = assemble_lunar_year(civil_year)?;
    combined.extend(assemble_lunar_year(civil_year + 1)?);
    combined.sort_by_key(|d| d.date);
    // The two windows tile with a boundary of shared days (whichever month
    // 11 falls near the trimmed edge of `civil_year`'s window is recomputed
    // identically as the lead-in of `civil_year + 1`'s window).
    combined.dedup_by(|a, b| a.date == b.date);
    combined.retain(|d| d.date.year() == civil_year);
    Ok(combined)
}

/// The public lunisolar-calendar facade.
///
/// Stateless apart from an optional bounded LRU cache of completed
/// per-year calendars; safe to share across threads.
///
/// # Example
///
/// ```
/// use chinese_lunar::calendar::LunarCalendar;
///
/// let engine = LunarCalendar::new();
/// let days = engine.year(2014).unwrap();
/// assert_eq!(days.len(), 365);
/// assert!(days.iter().any(|d| d.holiday_label == Some("春节")));
/// ```
pub struct LunarCalendar {
    cache: Mutex<YearCache>,
}

impl LunarCalendar {
    /// Creates an engine with the default cache capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an engine with an explicit cache capacity; `0` disables
    /// caching.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { cache: Mutex::new(YearCache::new(capacity)) }
    }

    /// Returns the per-day lunar calendar for civil year `civil_year`.
    pub fn year(&self, civil_year: i32) -> Result<Vec<CalendarDay>> {
        if let Some(cached) = self.cache.lock().unwrap().get(civil_year) {
            return Ok(cached);
        }
        let days = year_days(civil_year)?;
        self.cache.lock().unwrap().put(civil_year, days.clone());
        Ok(days)
    }
}

impl Default for LunarCalendar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2014_has_a_complete_set_of_civil_days() {
        let engine = LunarCalendar::new();
        let days = engine.year(2014).unwrap();
        assert_eq!(days.len(), 365);
        for (i, day) in days.iter().enumerate() {
            assert_eq!(day.date, NaiveDate::from_ymd_opt(2014, 1, 1).unwrap() + chrono::Duration::days(i as i64));
            assert!((1..=12).contains(&day.chinese_month_code) || (101..=112).contains(&day.chinese_month_code));
            assert!((1..=30).contains(&day.day_of_month));
        }
    }

    #[test]
    fn new_years_day_2014_is_month_one_day_one() {
        let engine = LunarCalendar::new();
        let days = engine.year(2014).unwrap();
        let lunar_new_year = days
            .iter()
            .find(|d| d.date == NaiveDate::from_ymd_opt(2014, 1, 31).unwrap())
            .expect("2014-01-31 should be in the calendar");
        assert_eq!(lunar_new_year.chinese_month_code, 1);
        assert_eq!(lunar_new_year.day_of_month, 1);
        assert_eq!(lunar_new_year.holiday_label, Some("春节"));
    }

    #[test]
    fn winter_solstice_day_falls_in_month_eleven() {
        let engine = LunarCalendar::new();
        let days = engine.year(2014).unwrap();
        let solstice_day = days
            .iter()
            .find(|d| d.date == NaiveDate::from_ymd_opt(2014, 12, 22).unwrap())
            .expect("2014-12-22 should be in the calendar");
        assert_eq!(solstice_day.chinese_month_code, 11);
    }

    #[test]
    fn year_2033_contains_a_leap_month() {
        let engine = LunarCalendar::new();
        let days = engine.year(2033).unwrap();
        assert!(days.iter().any(|d| d.chinese_month_code >= 101));
    }

    #[test]
    fn cache_returns_identical_results_on_repeat_lookups() {
        let engine = LunarCalendar::new();
        let first = engine.year(2020).unwrap();
        let second = engine.year(2020).unwrap();
        assert_eq!(first, second);
    }
}
