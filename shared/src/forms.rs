//! Synchronous form validation.
//!
//! Every create/edit dialog validates through these helpers before any
//! gateway call is made; a failure aborts submission with a user-facing
//! message and no network traffic.

use chrono::NaiveDate;

use crate::grade::{self, MarksError};

/// Validation failure with a message suitable for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left empty.
    Required(&'static str),
    /// A field could not be parsed (bad number, bad date).
    Invalid(&'static str),
    /// Grade marks outside their allowed range.
    Marks(MarksError),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::Required(field) => write!(f, "{field} is required"),
            FormError::Invalid(field) => write!(f, "{field} is not valid"),
            FormError::Marks(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for FormError {}

impl From<MarksError> for FormError {
    fn from(e: MarksError) -> Self {
        FormError::Marks(e)
    }
}

/// Rejects empty (or whitespace-only) values for a required field.
pub fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(())
    }
}

/// Parses a non-negative integer field.
pub fn parse_u32(field: &'static str, value: &str) -> Result<u32, FormError> {
    value.trim().parse().map_err(|_| FormError::Invalid(field))
}

/// Parses a `YYYY-MM-DD` value from a date input.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, FormError> {
    require(field, value)?;
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FormError::Invalid(field))
}

/// Validates raw grade-form input and returns `(part_a, part_b, total)`.
pub fn validate_grade_marks(part_a: &str, part_b: &str) -> Result<(u32, u32, u32), FormError> {
    let a = parse_u32("Part A marks", part_a)?;
    let b = parse_u32("Part B marks", part_b)?;
    let total = grade::validate_marks(a, b)?;
    Ok((a, b, total))
}

pub fn validate_user(username: &str, password: &str, name: &str, email: &str) -> Result<(), FormError> {
    require("Username", username)?;
    require("Password", password)?;
    require("Name", name)?;
    require("Email", email)
}

pub fn validate_event(title: &str, description: &str, location: &str, time: &str) -> Result<(), FormError> {
    require("Title", title)?;
    require("Description", description)?;
    require("Location", location)?;
    require("Time", time)
}

pub fn validate_notice(title: &str, content: &str) -> Result<(), FormError> {
    require("Title", title)?;
    require("Content", content)
}

pub fn validate_complaint(title: &str, description: &str) -> Result<(), FormError> {
    require("Title", title)?;
    require("Description", description)
}

pub fn validate_material(title: &str, subject: &str, subject_code: &str) -> Result<(), FormError> {
    require("Title", title)?;
    require("Subject", subject)?;
    require("Subject code", subject_code)
}

pub fn validate_waiver(reason: &str) -> Result<(), FormError> {
    require("Reason", reason)
}

/// Timestamp-based id, unique by convention within a single demo dataset.
pub fn make_id(prefix: &str, now_ms: i64) -> String {
    format!("{prefix}{now_ms}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::MarksError;

    #[test]
    fn required_fields_reject_whitespace() {
        assert_eq!(require("Title", "  "), Err(FormError::Required("Title")));
        assert_eq!(require("Title", "Tech Symposium"), Ok(()));
    }

    #[test]
    fn grade_form_rejects_out_of_range_parts_before_any_network_call() {
        assert_eq!(
            validate_grade_marks("11", "30"),
            Err(FormError::Marks(MarksError::PartAOutOfRange(11)))
        );
        assert_eq!(
            validate_grade_marks("5", "41"),
            Err(FormError::Marks(MarksError::PartBOutOfRange(41)))
        );
        assert_eq!(
            validate_grade_marks("abc", "30"),
            Err(FormError::Invalid("Part A marks"))
        );
        assert_eq!(validate_grade_marks("8", "35"), Ok((8, 35, 43)));
    }

    #[test]
    fn date_parsing_accepts_input_element_format() {
        assert!(parse_date("Date", "2025-03-15").is_ok());
        assert_eq!(parse_date("Date", ""), Err(FormError::Required("Date")));
        assert_eq!(parse_date("Date", "15/03/2025"), Err(FormError::Invalid("Date")));
    }

    #[test]
    fn generated_ids_carry_prefix_and_timestamp() {
        assert_eq!(make_id("G", 1738000000000), "G1738000000000");
        assert_eq!(make_id("N", 42), "N42");
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(FormError::Required("Title").to_string(), "Title is required");
        assert_eq!(
            FormError::Marks(MarksError::PartAOutOfRange(12)).to_string(),
            "Part A marks must be between 0 and 10 (got 12)"
        );
    }
}
