//! Client-side form checks
//!
//! These run before any request is built. The backend stays authoritative;
//! the checks only stop obviously incomplete forms from leaving the browser.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// A rejected form field and the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Implemented by every create/update payload.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

/// Nothing to check for payload-less actions.
impl Validate for () {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}

/// Non-blank text.
pub fn require_text(field: &'static str, value: &str, message: &str) -> ValidationResult {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, message))
    } else {
        Ok(())
    }
}

/// A value that must have been chosen (date pickers, selects).
pub fn require_some<T>(field: &'static str, value: &Option<T>, message: &str) -> ValidationResult {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(field, message)),
    }
}

pub const LATITUDE_RANGE_MESSAGE: &str = "Latitude must be between -90 and 90";
pub const LONGITUDE_RANGE_MESSAGE: &str = "Longitude must be between -180 and 180";

pub fn check_latitude(latitude: f64) -> ValidationResult {
    if latitude.is_finite() && (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        Err(ValidationError::new("latitude", LATITUDE_RANGE_MESSAGE))
    }
}

pub fn check_longitude(longitude: f64) -> ValidationResult {
    if longitude.is_finite() && (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(ValidationError::new("longitude", LONGITUDE_RANGE_MESSAGE))
    }
}

// ========================
// Form input parsing
// ========================

/// Trimmed text, `None` when blank.
pub fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `<input type="date">` value. Blank is `None`, garbage is an error.
pub fn parse_date(field: &'static str, input: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::new(field, format!("Invalid date: {}", trimmed)))
}

/// `<input type="time">` value, with or without seconds.
pub fn parse_time(field: &'static str, input: &str) -> Result<Option<NaiveTime>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map(Some)
        .map_err(|_| ValidationError::new(field, format!("Invalid time: {}", trimmed)))
}

pub fn parse_f64(field: &'static str, input: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| ValidationError::new(field, format!("{} must be a number", field_label(field))))
}

pub fn parse_u32(field: &'static str, input: &str) -> Result<Option<u32>, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ValidationError::new(field, format!("{} must be a whole number", field_label(field))))
}

/// Select value holding an entity id. Blank or non-numeric means "not chosen".
pub fn parse_id(input: &str) -> Option<u64> {
    input.trim().parse::<u64>().ok()
}

fn field_label(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_require_text_trims() {
        assert!(require_text("name", "   ", "Name is required").is_err());
        assert!(require_text("name", " Ann ", "Name is required").is_ok());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("schedule_date", "").unwrap(), None);
        assert_eq!(
            parse_date("schedule_date", "2024-03-05").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5)
        );
        assert!(parse_date("schedule_date", "05/03/2024").is_err());
    }

    #[test]
    fn test_parse_time_accepts_seconds() {
        let expected = NaiveTime::from_hms_opt(9, 30, 0);
        assert_eq!(parse_time("start_time", "09:30").unwrap(), expected);
        assert_eq!(parse_time("start_time", "09:30:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_f64_message_uses_label() {
        let err = parse_f64("annual_quota", "abc").unwrap_err();
        assert_eq!(err.message, "Annual quota must be a number");
        assert!(parse_f64("latitude", "NaN").is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-1"), None);
    }

    proptest! {
        #[test]
        fn latitude_in_range_accepted(lat in -90.0f64..=90.0) {
            prop_assert!(check_latitude(lat).is_ok());
        }

        #[test]
        fn latitude_out_of_range_rejected(lat in prop_oneof![-1.0e6f64..-90.0001, 90.0001f64..1.0e6]) {
            prop_assert_eq!(check_latitude(lat).unwrap_err().message, LATITUDE_RANGE_MESSAGE);
        }

        #[test]
        fn longitude_in_range_accepted(lng in -180.0f64..=180.0) {
            prop_assert!(check_longitude(lng).is_ok());
        }

        #[test]
        fn longitude_out_of_range_rejected(lng in prop_oneof![-1.0e6f64..-180.0001, 180.0001f64..1.0e6]) {
            prop_assert_eq!(check_longitude(lng).unwrap_err().field, "longitude");
        }
    }
}
