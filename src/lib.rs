//! # chinese-lunar
//!
//! `chinese-lunar` is a from-first-principles Chinese lunisolar calendar
//! engine. It derives every calendar fact — solar terms, new moons, month
//! boundaries, leap months — from its own solar and lunar position models
//! rather than from a precomputed almanac table.
//!
//! It includes:
//! - A reduced VSOP87D solar model and LEA-406 lunar model, with IAU 2000B
//!   nutation and light-time aberration corrections
//! - A pure Julian Date time engine spanning the proleptic Julian/Gregorian
//!   calendars across the 1582 reform, with the NASA/Espenak-Meeus ΔT model
//! - Secant-method root finding to invert solar-term and new-moon residuals
//! - Assembly of a civil year's lunisolar calendar, including leap-month
//!   detection via the "first month without a zhongqi" rule
//! - A bounded LRU cache of completed per-year calendars
//!
//! ## Quick Example: a civil year's lunar calendar
//!
//! ```
//! use chinese_lunar::LunarCalendar;
//!
//! let calendar = LunarCalendar::new();
//! let days = calendar.year(2014).unwrap();
//!
//! let new_year = days.iter().find(|d| d.chinese_month_code == 1 && d.day_of_month == 1).unwrap();
//! println!("{}: {}{}", new_year.date, new_year.month_label, new_year.day_label);
//! ```
//!
//! This walks the full civil year 2014, resolving every day's lunar month
//! and day-of-month, and finds Chinese New Year (月正初一) among them.

pub mod aberration;
pub mod angles;
pub mod cache;
pub mod calendar;
pub mod data;
pub mod error;
pub mod events;
pub mod labels;
pub mod moon;
pub mod nutation;
pub mod rootfind;
pub mod sun;
pub mod time;

pub use calendar::{CalendarDay, LunarCalendar};
pub use error::{AstroError, Result};
pub use events::{enumerate_new_moons, solar_term, AstroEvent};
pub use moon::apparent_moon;
pub use sun::apparent_sun;
