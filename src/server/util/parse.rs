//! Helpers for reading raw form and query fields.

use chrono::NaiveDate;

use crate::server::error::validation::ValidationError;

/// Returns the trimmed value, treating absent and blank fields alike.
pub fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the trimmed value or `MissingRequired`.
pub fn required(value: Option<String>) -> Result<String, ValidationError> {
    present(value).ok_or(ValidationError::MissingRequired)
}

/// Parses an integer id field.
///
/// # Returns
/// - `Ok(i32)` - Parsed value
/// - `Err(ValidationError::InvalidNumber)` - Not an integer
pub fn parse_i32(field: &'static str, value: &str) -> Result<i32, ValidationError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

/// Parses a finite decimal field; `NaN` and infinities are rejected.
pub fn parse_f64(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidNumber {
        field,
        value: value.to_string(),
    };

    let parsed = value.trim().parse::<f64>().map_err(|_| invalid())?;
    if !parsed.is_finite() {
        return Err(invalid());
    }

    Ok(parsed)
}

/// Parses a finite decimal field that must be greater than zero.
pub fn parse_positive_f64(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let parsed = parse_f64(field, value)?;
    if parsed <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    Ok(parsed)
}

/// Parses an optional id field, blank meaning `None`.
pub fn parse_optional_i32(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<i32>, ValidationError> {
    present(value).map(|v| parse_i32(field, &v)).transpose()
}

/// Parses a `YYYY-MM-DD` date with an unsigned four digit year.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        field,
        value: value.to_string(),
    };

    let trimmed = value.trim();
    let well_formed = trimmed.len() == 10
        && trimmed
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}
