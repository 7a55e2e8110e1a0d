//! Field validators shared by the create and update paths.
//!
//! Each validator is pure and total: given any input it either returns the
//! (possibly normalized) value or a [`Error::Validation`] naming the field
//! and exactly one failure reason. Validation always runs before any store
//! mutation, so a failed check never leaves partial state behind.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Validate a required string: non-empty after trimming, at most `max`
/// characters. Returns the trimmed value, which is what gets stored.
pub fn non_empty(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(field, "must be a non-empty string"));
    }
    if trimmed.chars().count() > max {
        return Err(Error::validation(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate an optional text field: trimmed length at most `max` characters.
/// The value is stored as given; only its trimmed length is checked.
pub fn bounded_text(field: &'static str, value: &str, max: usize) -> Result<String> {
    if value.trim().chars().count() > max {
        return Err(Error::validation(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(value.to_string())
}

/// Validate a non-negative integer amount (cents).
pub fn non_negative_cents(field: &'static str, value: i64) -> Result<i64> {
    if value < 0 {
        return Err(Error::validation(field, "must be a non-negative integer"));
    }
    Ok(value)
}

/// Validate a finite number (rejects NaN and infinities).
pub fn finite(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::validation(field, "must be a finite number"));
    }
    Ok(value)
}

/// Validate a finite, non-negative number.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(Error::validation(field, "must be a non-negative number"));
    }
    Ok(value)
}

/// Validate a strict `YYYY-MM-DD` calendar date.
///
/// The shape check is exact (four digits, dash, two digits, dash, two
/// digits), then chrono rejects dates that do not exist on the calendar,
/// e.g. `2025-02-30` or `2025-13-01`.
pub fn iso_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(Error::validation(field, "expected format YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| Error::validation(field, "must be a real calendar date"))
}
