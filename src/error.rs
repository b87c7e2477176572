//! Error types for the lunisolar calendar engine.
//!
//! Every fallible public operation returns [`Result<T>`]; nothing in
//! this crate panics on bad input.

use thiserror::Error;

/// Main error type for calendar-engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AstroError {
    /// A civil calendar date could not be represented, either because a
    /// field is out of its natural range or because it falls in the
    /// nonexistent Gregorian-reform gap and could not be resolved.
    #[error("Invalid date: {reason}")]
    InvalidDate {
        /// Description of the issue.
        reason: String,
    },

    /// A numerical calculation (root finding, series evaluation) failed
    /// to produce a usable result.
    #[error("Calculation error in {calculation}: {reason}")]
    CalculationError {
        /// What calculation failed.
        calculation: &'static str,
        /// Why it failed.
        reason: String,
    },

    /// A value fell outside the range this operation accepts.
    #[error("{parameter} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Parameter name.
        parameter: &'static str,
        /// The invalid value.
        value: f64,
        /// Min value (inclusive).
        min: f64,
        /// Max value (inclusive).
        max: f64,
    },

    /// A lunar year's 12 regular months all had a zhongqi, so no month
    /// qualified as the leap month even though the year has 13 new
    /// moons between winter solstices — an internal consistency failure
    /// rather than an expected outcome.
    #[error("no leap month found for lunar year {year} (month codes: {month_codes:?})")]
    LeapNotFound {
        /// The civil year the lunar year started in.
        year: i32,
        /// The month codes assigned before the leap scan failed.
        month_codes: Vec<i32>,
    },
}

/// Type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, AstroError>;

/// Validates that a value is within a range.
#[inline]
pub fn validate_range(value: f64, min: f64, max: f64, parameter: &'static str) -> Result<()> {
    if value < min || value > max {
        Err(AstroError::OutOfRange { parameter, value, min, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AstroError::OutOfRange { parameter: "civil_year", value: 400000.0, min: -1999.0, max: 3000.0 };
        assert_eq!(
            err.to_string(),
            "civil_year value 400000 is out of range [-1999, 3000]"
        );
    }

    #[test]
    fn validate_range_accepts_bounds_inclusive() {
        assert!(validate_range(-1999.0, -1999.0, 3000.0, "civil_year").is_ok());
        assert!(validate_range(3000.0, -1999.0, 3000.0, "civil_year").is_ok());
        assert!(validate_range(3001.0, -1999.0, 3000.0, "civil_year").is_err());
    }

    #[test]
    fn leap_not_found_display() {
        let err = AstroError::LeapNotFound { year: 2033, month_codes: vec![11, 12, 1, 2] };
        assert!(err.to_string().contains("2033"));
    }
}
