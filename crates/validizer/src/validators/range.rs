//! `lo-hi` range validator

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationResult};

/// `lo SEP hi`: each end is an optionally negative token, the separator is
/// any run of characters that could not be part of a number. A `-` directly
/// before a token's first character is its sign.
static RANGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[^\p{L}\p{N}.+-]*(?P<lo>-?[\p{L}\p{N}.]+)[^\p{L}\p{N}.]+?(?P<hi>-?[\p{L}\p{N}.]+)[^\p{L}\p{N}.]*$",
    )
    .unwrap()
});

/// Largest magnitude an `f64` can have and still truncate into an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

// ============================================================================
// NUMBER VALUE
// ============================================================================

/// A parsed number: integral or floating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumberValue {
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
}

impl NumberValue {
    /// Returns the value as a float for comparisons.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Truncates toward zero, failing when the result does not fit an `i64`.
    pub fn to_integer(self) -> ValidationResult<Self> {
        match self {
            Self::Integer(_) => Ok(self),
            Self::Float(f) => {
                let truncated = f.trunc();
                if (-I64_LIMIT..I64_LIMIT).contains(&truncated) {
                    Ok(Self::Integer(truncated as i64))
                } else {
                    Err(ValidationError::out_of_range(
                        "integer_overflow",
                        self,
                        Self::Integer(i64::MIN),
                        Self::Integer(i64::MAX),
                    ))
                }
            }
        }
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl PartialOrd for NumberValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

/// Parses a finite number.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// BOUNDS
// ============================================================================

/// An inclusive numeric range with `lo <= hi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    lo: NumberValue,
    hi: NumberValue,
}

impl Bounds {
    /// Creates a range, rejecting `lo > hi`.
    pub fn new(lo: NumberValue, hi: NumberValue) -> ValidationResult<Self> {
        if lo > hi {
            return Err(ValidationError::new(
                ErrorKind::MalformedRange,
                "range_inverted",
                format!("{lo} is greater than: {hi}."),
            )
            .with_param("lo", lo.to_string())
            .with_param("hi", hi.to_string()));
        }
        Ok(Self { lo, hi })
    }

    /// Lower end.
    #[must_use]
    pub fn lo(&self) -> NumberValue {
        self.lo
    }

    /// Upper end.
    #[must_use]
    pub fn hi(&self) -> NumberValue {
        self.hi
    }

    /// Returns `true` if `value` lies within the range, ends included.
    #[must_use]
    pub fn contains(&self, value: NumberValue) -> bool {
        self.lo <= value && value <= self.hi
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

impl FromStr for Bounds {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Range::new().validate(s)
    }
}

// ============================================================================
// RANGE VALIDATOR
// ============================================================================

/// Validates `lo-hi` range input.
///
/// # Examples
///
/// ```
/// use validizer::validators::{NumberValue, Range};
/// use validizer::foundation::Validate;
///
/// let bounds = Range::new().integers(true).validate("5-10").unwrap();
/// assert_eq!(bounds.lo(), NumberValue::Integer(5));
/// assert_eq!(bounds.hi(), NumberValue::Integer(10));
/// assert!(Range::new().validate("10-5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    integers: bool,
}

impl Range {
    /// Creates a range validator producing float endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncates both endpoints to integers when enabled.
    #[must_use = "builder methods must be chained or built"]
    pub fn integers(mut self, enabled: bool) -> Self {
        self.integers = enabled;
        self
    }
}

impl Validate for Range {
    type Input = str;
    type Output = Bounds;

    fn validate(&self, input: &str) -> ValidationResult<Bounds> {
        let Some(captures) = RANGE_PATTERN.captures(input) else {
            return Err(ValidationError::new(
                ErrorKind::MalformedRange,
                "range_format",
                format!("{input} is not in correct format (9-9)."),
            )
            .with_param("input", input.to_owned())
            .with_param("expected", "9-9"));
        };

        let (Some(lo), Some(hi)) = (
            parse_number(&captures["lo"]),
            parse_number(&captures["hi"]),
        ) else {
            return Err(ValidationError::new(
                ErrorKind::BadCharacter,
                "range_not_numeric",
                format!("{input} contains a non number character."),
            )
            .with_param("input", input.to_owned()));
        };

        let (mut lo, mut hi) = (NumberValue::Float(lo), NumberValue::Float(hi));
        if self.integers {
            lo = lo.to_integer()?;
            hi = hi.to_integer()?;
        }
        Bounds::new(lo, hi)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_endpoints_by_default() {
        let bounds = Range::new().validate("5-10").unwrap();
        assert_eq!(bounds.lo(), NumberValue::Float(5.0));
        assert_eq!(bounds.hi(), NumberValue::Float(10.0));
        assert_eq!(bounds.to_string(), "5-10");
    }

    #[test]
    fn test_integer_endpoints() {
        let bounds = Range::new().integers(true).validate("1.9-7.2").unwrap();
        assert_eq!(bounds.lo(), NumberValue::Integer(1));
        assert_eq!(bounds.hi(), NumberValue::Integer(7));
    }

    #[test]
    fn test_lenient_separators() {
        assert!(Range::new().validate("5 - 10").is_ok());
        assert!(Range::new().validate("5 to 10").is_err());
        assert!(Range::new().validate("5,10").is_ok());
    }

    #[test]
    fn test_inverted_range() {
        let error = Range::new().validate("10-5").unwrap_err();
        assert_eq!(error.kind, ErrorKind::MalformedRange);
        assert_eq!(error.message, "10 is greater than: 5.");
    }

    #[test]
    fn test_wrong_part_count() {
        for input in ["5", "1-2-3", "", "-"] {
            let error = Range::new().validate(input).unwrap_err();
            assert_eq!(error.kind, ErrorKind::MalformedRange, "input {input:?}");
        }
    }

    #[test]
    fn test_non_numeric() {
        let error = Range::new().validate("a-5").unwrap_err();
        assert_eq!(error.kind, ErrorKind::BadCharacter);
        assert_eq!(error.message, "a-5 contains a non number character.");
    }

    #[test]
    fn test_bounds_contains() {
        let bounds: Bounds = "1-10".parse().unwrap();
        assert!(bounds.contains(NumberValue::Integer(1)));
        assert!(bounds.contains(NumberValue::Float(10.0)));
        assert!(!bounds.contains(NumberValue::Float(10.5)));
    }

    #[test]
    fn test_negative_endpoints_keep_their_sign() {
        let bounds = Range::new().validate("-5-10").unwrap();
        assert_eq!(bounds.lo(), NumberValue::Float(-5.0));
        assert_eq!(bounds.hi(), NumberValue::Float(10.0));

        let bounds = Range::new().integers(true).validate("-10 - -5").unwrap();
        assert_eq!(bounds.lo(), NumberValue::Integer(-10));
        assert_eq!(bounds.hi(), NumberValue::Integer(-5));

        let error = Range::new().validate("5--10").unwrap_err();
        assert_eq!(error.kind, ErrorKind::MalformedRange);
        assert_eq!(error.message, "5 is greater than: -10.");
    }

    #[test]
    fn test_integer_truncation_overflow() {
        assert_eq!(
            NumberValue::Float(-7.9).to_integer().unwrap(),
            NumberValue::Integer(-7)
        );
        let error = NumberValue::Float(1e30).to_integer().unwrap_err();
        assert_eq!(error.kind, ErrorKind::OutOfRange);
        assert_eq!(error.code, "integer_overflow");
        assert!(
            Range::new()
                .integers(true)
                .validate("0-1e30")
                .is_err()
        );
    }

    #[test]
    fn test_integer_ordering_is_exact() {
        let big = NumberValue::Integer(i64::MAX);
        let smaller = NumberValue::Integer(i64::MAX - 1);
        assert!(smaller < big);
    }
}
