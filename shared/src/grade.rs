//! Internal-assessment grading.
//!
//! Marks are split into part A (out of 10) and part B (out of 40); the
//! letter grade is a step function of the total out of 50. Out-of-range
//! marks are rejected before calculation, never clamped.

use serde::{Deserialize, Serialize};

/// Maximum marks for part A.
pub const PART_A_MAX: u32 = 10;
/// Maximum marks for part B.
pub const PART_B_MAX: u32 = 40;

/// Letter grade, with the wire spelling used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Letter {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    F,
}

impl Letter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Letter::APlus => "A+",
            Letter::A => "A",
            Letter::BPlus => "B+",
            Letter::B => "B",
            Letter::C => "C",
            Letter::F => "F",
        }
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a validated total (out of 50) to its letter grade.
///
/// Band lower bounds are inclusive: 45 is the lowest A+, 40 the lowest A,
/// and so on down to F below 25.
pub fn letter_for(total: u32) -> Letter {
    match total {
        45.. => Letter::APlus,
        40..=44 => Letter::A,
        35..=39 => Letter::BPlus,
        30..=34 => Letter::B,
        25..=29 => Letter::C,
        _ => Letter::F,
    }
}

/// Mark validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarksError {
    PartAOutOfRange(u32),
    PartBOutOfRange(u32),
}

impl std::fmt::Display for MarksError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarksError::PartAOutOfRange(v) => {
                write!(f, "Part A marks must be between 0 and {PART_A_MAX} (got {v})")
            }
            MarksError::PartBOutOfRange(v) => {
                write!(f, "Part B marks must be between 0 and {PART_B_MAX} (got {v})")
            }
        }
    }
}

impl std::error::Error for MarksError {}

/// Checks both parts against their ranges and returns the total.
pub fn validate_marks(part_a: u32, part_b: u32) -> Result<u32, MarksError> {
    if part_a > PART_A_MAX {
        return Err(MarksError::PartAOutOfRange(part_a));
    }
    if part_b > PART_B_MAX {
        return Err(MarksError::PartBOutOfRange(part_b));
    }
    Ok(part_a + part_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_on_the_lower_bound() {
        assert_eq!(letter_for(50), Letter::APlus);
        assert_eq!(letter_for(45), Letter::APlus);
        assert_eq!(letter_for(44), Letter::A);
        assert_eq!(letter_for(40), Letter::A);
        assert_eq!(letter_for(39), Letter::BPlus);
        assert_eq!(letter_for(35), Letter::BPlus);
        assert_eq!(letter_for(34), Letter::B);
        assert_eq!(letter_for(30), Letter::B);
        assert_eq!(letter_for(29), Letter::C);
        assert_eq!(letter_for(25), Letter::C);
        assert_eq!(letter_for(24), Letter::F);
        assert_eq!(letter_for(0), Letter::F);
    }

    #[test]
    fn every_valid_total_maps_to_exactly_one_letter() {
        for total in 0..=50 {
            // Exhaustive over the whole valid range.
            let letter = letter_for(total);
            assert!(matches!(
                letter,
                Letter::APlus | Letter::A | Letter::BPlus | Letter::B | Letter::C | Letter::F
            ));
        }
    }

    #[test]
    fn marks_outside_range_are_rejected_not_clamped() {
        assert_eq!(validate_marks(11, 0), Err(MarksError::PartAOutOfRange(11)));
        assert_eq!(validate_marks(0, 41), Err(MarksError::PartBOutOfRange(41)));
        assert_eq!(validate_marks(10, 40), Ok(50));
        assert_eq!(validate_marks(0, 0), Ok(0));
    }

    #[test]
    fn letter_serializes_with_wire_spelling() {
        assert_eq!(serde_json::to_string(&Letter::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Letter::BPlus).unwrap(), "\"B+\"");
        assert_eq!(serde_json::from_str::<Letter>("\"A\"").unwrap(), Letter::A);
    }
}
