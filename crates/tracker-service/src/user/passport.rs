//! Passport parsing.

use std::fmt;
use std::str::FromStr;

use tracker_core::error::AppError;

/// Field name reported in validation details.
pub const PASSPORT_FIELD: &str = "passportNumber";

const SERIE_DIGITS: usize = 4;
const NUMBER_DIGITS: usize = 6;

/// A passport serie/number pair, e.g. `"1234 567890"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Passport {
    /// Four-digit serie.
    pub serie: i32,
    /// Six-digit number.
    pub number: i32,
}

impl Passport {
    /// Parse `"SERIE NUMBER"`: exactly four digits, one space, six digits.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let invalid = || {
            AppError::invalid_field(
                PASSPORT_FIELD,
                "must be a 4-digit serie and a 6-digit number separated by a space",
            )
        };

        let (serie, number) = input.trim().split_once(' ').ok_or_else(invalid)?;
        Ok(Self {
            serie: parse_digits(serie, SERIE_DIGITS).ok_or_else(invalid)?,
            number: parse_digits(number, NUMBER_DIGITS).ok_or_else(invalid)?,
        })
    }
}

impl FromStr for Passport {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Passport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04} {:06}", self.serie, self.number)
    }
}

fn parse_digits(s: &str, len: usize) -> Option<i32> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
