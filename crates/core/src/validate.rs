//! Presence checks for form payloads.
//!
//! The admin UI rejects obviously incomplete submissions before any network
//! call is made. These checks are intentionally shallow -- the backend owns
//! real validation; the client only refuses blank required fields and
//! non-finite coordinates.

use crate::error::CoreError;

/// A payload that can be presence-checked before submission.
pub trait Validate {
    /// Return `Err(CoreError::Validation)` if a required field is missing
    /// or blank. A passing payload is not guaranteed to be accepted by the
    /// backend.
    fn validate(&self) -> Result<(), CoreError>;
}

/// Validate that a required text field is present and non-blank.
pub fn require_text(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate an optional text field: absent is fine, blank is not.
pub fn require_text_if_present(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), CoreError> {
    match value {
        Some(value) => require_text(field, value),
        None => Ok(()),
    }
}

/// Validate a latitude in decimal degrees.
pub fn validate_latitude(latitude: f64) -> Result<(), CoreError> {
    if latitude.is_nan() || latitude.is_infinite() {
        return Err(CoreError::Validation(
            "latitude must be a finite number".to_string(),
        ));
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CoreError::Validation(format!(
            "latitude must be between -90 and 90, got {latitude}"
        )));
    }
    Ok(())
}

/// Validate a longitude in decimal degrees.
pub fn validate_longitude(longitude: f64) -> Result<(), CoreError> {
    if longitude.is_nan() || longitude.is_infinite() {
        return Err(CoreError::Validation(
            "longitude must be a finite number".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CoreError::Validation(format!(
            "longitude must be between -180 and 180, got {longitude}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
