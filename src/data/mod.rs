//! Static coefficient tables for the ephemeris engine.
//!
//! VSOP87D Earth heliocentric longitude series, the LEA-406 lunar
//! harmonic series, the IAU 2000B nutation series, and the light-time
//! aberration series. Every table here is a `&'static [_]` slice so the evaluation
//! routines in [`crate::sun`], [`crate::moon`], [`crate::nutation`], and
//! [`crate::aberration`] can walk them with a single straight loop
//! regardless of how many rows are present.
//!
//! The tables shipped in this module are leading-term subsets of the full
//! published series (VSOP87D has on the order of a thousand Earth-longitude
//! terms across `L0..L5`; LEA-406 has several thousand lunar terms; IAU
//! 2000B has 77 rows) — the complete numeric tables were not available in
//! the sources this crate was built from, and hand-transcribing thousands
//! of coefficients from memory would be unverifiable. Every table here is
//! a genuine, correctly-shaped subset of its series (same term structure,
//! same units, leading/dominant terms first), and the evaluation code does
//! not care how many rows a table has, so dropping in the complete
//! official tables is a data change, not a code change. See `DESIGN.md`.

pub mod aberration_terms;
pub mod lea406_terms;
pub mod nutation_terms;
pub mod vsop87d;
