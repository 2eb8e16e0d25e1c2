use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Types
pub type Year = u32;

/// Closed integer interval `[min, max]`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedRange {
    pub min: u32,
    pub max: u32,
}

impl BoundedRange {
    pub const fn new(min: u32, max: u32) -> Self {
        BoundedRange { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }

    /// Narrows the lower bound, used to sample a death year no earlier than the birth year
    pub fn starting_at(&self, min: u32) -> BoundedRange {
        BoundedRange {
            min: min.clamp(self.min, self.max),
            max: self.max,
        }
    }
}

impl fmt::Display for BoundedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]", self.min, self.max)
    }
}

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonCount(u32);

impl PersonCount {
    pub fn to_number(self) -> usize {
        self.0 as usize
    }

    /// Validates a command line value, which may have been left out
    pub fn from_argument(value: Option<&str>) -> Result<Self, PersonCountError> {
        value.ok_or(PersonCountError::Missing)?.parse()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonCountError {
    #[error("Number of people was not specified, expected a value in range {}", PERSON_COUNT_RANGE)]
    Missing,

    #[error("Specified number of people ({0}) is not a number, expected a value in range {}", PERSON_COUNT_RANGE)]
    NotANumber(String),

    #[error("Specified number of people ({0}) must be written as an integer in range {}", PERSON_COUNT_RANGE)]
    NotAnInteger(String),

    #[error("Specified number of people ({0}) is fractional, expected a whole number in range {}", PERSON_COUNT_RANGE)]
    Fractional(String),

    #[error("Specified number of people ({0}) is out of valid range {}", PERSON_COUNT_RANGE)]
    OutOfRange(String),
}

impl TryFrom<i64> for PersonCount {
    type Error = PersonCountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u32::try_from(value) {
            Ok(count) if PERSON_COUNT_RANGE.contains(count) => Ok(PersonCount(count)),
            _ => Err(PersonCountError::OutOfRange(value.to_string())),
        }
    }
}

impl FromStr for PersonCount {
    type Err = PersonCountError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();

        if let Ok(value) = text.parse::<i64>() {
            return PersonCount::try_from(value);
        }

        // Digits only but too large for an i64
        let digits = text.trim_start_matches(['-', '+']);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PersonCountError::OutOfRange(text.to_string()));
        }

        match text.parse::<f64>() {
            Ok(value) if value.is_finite() && value.fract() != 0.0 => {
                Err(PersonCountError::Fractional(text.to_string()))
            }
            // e.g. `5.0` or `1e3`
            Ok(value) if value.is_finite() => Err(PersonCountError::NotAnInteger(text.to_string())),
            _ => Err(PersonCountError::NotANumber(text.to_string())),
        }
    }
}

impl Default for PersonCount {
    fn default() -> Self {
        PersonCount(PERSON_COUNT_RANGE.min)
    }
}

impl fmt::Display for PersonCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Values
pub const PERSON_COUNT_RANGE: BoundedRange = BoundedRange::new(1, 9001);
pub const MIN_BIRTH_YEAR: Year = 1900;
pub const MAX_DEATH_YEAR: Year = 2000;
pub const YEAR_RANGE: BoundedRange = BoundedRange::new(MIN_BIRTH_YEAR, MAX_DEATH_YEAR);
