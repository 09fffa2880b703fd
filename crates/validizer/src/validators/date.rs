//! Calendar date validator.
//!
//! Accepts year, month and day as three numeric components separated by any
//! punctuation or whitespace (`2024 02 29`, `2024-02-29`, `2024/2/29`).

use std::fmt;
use std::str::FromStr;

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationResult};

/// Returns `true` for Gregorian leap years.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in `month` (1-12) of `year`, or `None` for an invalid
/// month.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

// ============================================================================
// OUTPUT
// ============================================================================

/// How a validated date is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// A [`NaiveDate`].
    #[default]
    Structured,
    /// A `YYYY-MM-DD` string.
    Iso,
}

impl FromStr for DateFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" | "datetime" | "structured" => Ok(Self::Structured),
            "iso" | "string" => Ok(Self::Iso),
            other => Err(ValidationError::new(
                ErrorKind::UnknownCategory,
                "date_format",
                format!("{other} is not a date format (structured, iso)."),
            )),
        }
    }
}

/// A validated date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DateValue {
    /// Structured date.
    Date(NaiveDate),
    /// `YYYY-MM-DD` text.
    Iso(String),
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Iso(text) => f.write_str(text),
        }
    }
}

// ============================================================================
// DATE VALIDATOR
// ============================================================================

/// Validates year/month/day input.
///
/// # Examples
///
/// ```
/// use validizer::validators::{Date, DateFormat, DateValue};
/// use validizer::foundation::Validate;
///
/// let date = Date::new().format(DateFormat::Iso);
/// assert_eq!(date.validate("2024 2 29").unwrap(), DateValue::Iso("2024-02-29".into()));
/// assert!(date.validate("2023 2 29").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Date {
    format: DateFormat,
}

impl Date {
    /// Creates a validator returning structured dates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format.
    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, format: DateFormat) -> Self {
        self.format = format;
        self
    }
}

fn out_of_range(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(ErrorKind::OutOfRange, code, message)
}

impl Validate for Date {
    type Input = str;
    type Output = DateValue;

    fn validate(&self, input: &str) -> ValidationResult<DateValue> {
        if input.trim().is_empty() {
            return Err(ValidationError::blank("date_blank"));
        }

        let parts: Vec<&str> = input
            .split(|c: char| !c.is_alphanumeric())
            .filter(|part| !part.is_empty())
            .collect();

        let [year, month, day] = parts.as_slice() else {
            return Err(ValidationError::new(
                ErrorKind::InvalidFormat,
                "date_format",
                format!("{input} does not follow format (YYYY-MM-DD)."),
            )
            .with_param("expected", "YYYY-MM-DD"));
        };

        if !parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())) {
            return Err(ValidationError::new(
                ErrorKind::BadCharacter,
                "date_not_numeric",
                format!("{input} contains a non-number character."),
            ));
        }

        let year_num: i32 = year
            .parse()
            .map_err(|_| out_of_range("date_year", format!("{year} is not a valid year.")))?;

        let month_num = month
            .parse::<u32>()
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or_else(|| out_of_range("date_month", format!("{month} is not a valid month.")))?;

        let max_day = days_in_month(year_num, month_num).unwrap_or(31);
        let day_num = day
            .parse::<u32>()
            .ok()
            .filter(|d| (1..=max_day).contains(d))
            .ok_or_else(|| {
                let month_name = u8::try_from(month_num)
                    .ok()
                    .and_then(|m| Month::try_from(m).ok())
                    .map_or("that month", |m| m.name());
                out_of_range(
                    "date_day",
                    format!("{day} is not a valid day for: {month_name}."),
                )
                .with_param("max", max_day.to_string())
            })?;

        let date = NaiveDate::from_ymd_opt(year_num, month_num, day_num)
            .ok_or_else(|| out_of_range("date_year", format!("{year} is not a valid year.")))?;

        Ok(match self.format {
            DateFormat::Structured => DateValue::Date(date),
            DateFormat::Iso => DateValue::Iso(date.format("%Y-%m-%d").to_string()),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod calendar {
        use super::*;

        #[test]
        fn test_leap_years() {
            assert!(is_leap_year(2024));
            assert!(is_leap_year(2000));
            assert!(!is_leap_year(1900));
            assert!(!is_leap_year(2023));
        }

        #[test]
        fn test_days_in_month() {
            assert_eq!(days_in_month(2024, 2), Some(29));
            assert_eq!(days_in_month(2023, 2), Some(28));
            assert_eq!(days_in_month(2023, 9), Some(30));
            assert_eq!(days_in_month(2023, 12), Some(31));
            assert_eq!(days_in_month(2023, 13), None);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_structured_output() {
            let value = Date::new().validate("2024 02 29").unwrap();
            assert_eq!(
                value,
                DateValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            );
            assert_eq!(value.to_string(), "2024-02-29");
        }

        #[test]
        fn test_separators() {
            let date = Date::new().format(DateFormat::Iso);
            for input in ["2024-02-29", "2024/2/29", "2024.02.29", " 2024 , 02 , 29 "] {
                assert_eq!(
                    date.validate(input).unwrap(),
                    DateValue::Iso("2024-02-29".into()),
                    "input {input:?}"
                );
            }
        }

        #[test]
        fn test_non_leap_february() {
            let error = Date::new().validate("2023 02 29").unwrap_err();
            assert_eq!(error.kind, ErrorKind::OutOfRange);
            assert_eq!(error.message, "29 is not a valid day for: February.");
            assert_eq!(error.param("max"), Some("28"));
        }

        #[test]
        fn test_invalid_month() {
            for input in ["2024 13 01", "2024 00 01"] {
                let error = Date::new().validate(input).unwrap_err();
                assert_eq!(error.kind, ErrorKind::OutOfRange);
                assert_eq!(error.code, "date_month");
            }
        }

        #[test]
        fn test_day_zero_and_thirty_first() {
            assert!(Date::new().validate("2024 01 00").is_err());
            assert!(Date::new().validate("2024 09 31").is_err());
            assert!(Date::new().validate("2024 10 31").is_ok());
        }

        #[test]
        fn test_shape_errors() {
            assert_eq!(
                Date::new().validate("2024 02").unwrap_err().kind,
                ErrorKind::InvalidFormat
            );
            assert_eq!(
                Date::new().validate("2024 feb 02").unwrap_err().kind,
                ErrorKind::BadCharacter
            );
            assert_eq!(Date::new().validate("").unwrap_err().kind, ErrorKind::Blank);
        }

        #[test]
        fn test_year_overflow() {
            let error = Date::new().validate("99999999999 01 01").unwrap_err();
            assert_eq!(error.code, "date_year");
        }

        #[test]
        fn test_format_names() {
            assert_eq!("string".parse::<DateFormat>().unwrap(), DateFormat::Iso);
            assert_eq!(
                "datetime".parse::<DateFormat>().unwrap(),
                DateFormat::Structured
            );
        }
    }
}
