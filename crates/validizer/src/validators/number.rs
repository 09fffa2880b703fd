//! Numeric input validator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CURRENCY_SYMBOL;
use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationResult};
use crate::validators::range::{Bounds, NumberValue, Range, parse_number};

/// Integers beyond this magnitude are not exactly representable as `f64`.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

/// How a validated number is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Integer when the value is integral, float otherwise.
    #[default]
    Any,
    /// Truncated to an integer.
    Integer,
    /// Always a float.
    Float,
    /// A currency string: symbol, thousands separators, two decimals.
    Currency,
}

impl FromStr for NumberFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "int" | "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "$" | "currency" => Ok(Self::Currency),
            other => Err(ValidationError::new(
                ErrorKind::UnknownCategory,
                "number_format",
                format!("{other} is not a number format (any, int, float, currency)."),
            )),
        }
    }
}

/// A validated number in its requested format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NumberOutput {
    /// An integer.
    Integer(i64),
    /// A float.
    Float(f64),
    /// A formatted currency amount, e.g. `$1,234.50`.
    Currency(String),
}

impl fmt::Display for NumberOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Currency(s) => f.write_str(s),
        }
    }
}

impl From<NumberValue> for NumberOutput {
    fn from(value: NumberValue) -> Self {
        match value {
            NumberValue::Integer(i) => Self::Integer(i),
            NumberValue::Float(x) => Self::Float(x),
        }
    }
}

// ============================================================================
// NUMBER VALIDATOR
// ============================================================================

/// Validates numeric input with an optional inclusive range.
///
/// # Examples
///
/// ```
/// use validizer::validators::{Number, NumberFormat, NumberOutput};
/// use validizer::foundation::Validate;
///
/// let age = Number::new().range_str("0-130").unwrap();
/// assert_eq!(age.validate("42").unwrap(), NumberOutput::Integer(42));
/// assert!(age.validate("200").is_err());
///
/// let price = Number::new().format(NumberFormat::Currency);
/// assert_eq!(
///     price.validate("1234.5").unwrap(),
///     NumberOutput::Currency("$1,234.50".into())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    format: NumberFormat,
    bounds: Option<Bounds>,
    currency_symbol: String,
}

impl Number {
    /// Creates an unbounded validator returning [`NumberFormat::Any`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: NumberFormat::Any,
            bounds: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
        }
    }

    /// Sets the output format.
    #[must_use = "builder methods must be chained or built"]
    pub fn format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Restricts values to `bounds`.
    #[must_use = "builder methods must be chained or built"]
    pub fn range(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Restricts values to a range written as `"lo-hi"`.
    ///
    /// A blank string leaves the validator unbounded.
    pub fn range_str(self, range: &str) -> ValidationResult<Self> {
        if range.trim().is_empty() {
            return Ok(self);
        }
        Ok(self.range(Range::new().validate(range)?))
    }

    /// Sets the symbol used by [`NumberFormat::Currency`].
    #[must_use = "builder methods must be chained or built"]
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    fn parse(input: &str) -> ValidationResult<NumberValue> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::blank("number_blank"));
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Ok(NumberValue::Integer(i));
        }
        let value = parse_number(trimmed).ok_or_else(|| {
            ValidationError::new(
                ErrorKind::BadCharacter,
                "not_a_number",
                format!("{input} is not a number."),
            )
            .with_param("input", input.to_owned())
        })?;
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT_FLOAT_INT {
            Ok(NumberValue::Integer(value as i64))
        } else {
            Ok(NumberValue::Float(value))
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Number {
    type Input = str;
    type Output = NumberOutput;

    fn validate(&self, input: &str) -> ValidationResult<NumberOutput> {
        let value = Self::parse(input)?;

        if let Some(bounds) = &self.bounds
            && !bounds.contains(value)
        {
            return Err(ValidationError::out_of_range(
                "number_range",
                value,
                bounds.lo(),
                bounds.hi(),
            ));
        }

        Ok(match self.format {
            NumberFormat::Any => value.into(),
            NumberFormat::Integer => value.to_integer()?.into(),
            NumberFormat::Float => NumberOutput::Float(value.as_f64()),
            NumberFormat::Currency => {
                NumberOutput::Currency(format_currency(&self.currency_symbol, value.as_f64()))
            }
        })
    }
}

// ============================================================================
// CURRENCY FORMATTING
// ============================================================================

/// Formats `value` as `{symbol}{sign}{thousands-grouped}.{cents}`.
fn format_currency(symbol: &str, value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{symbol}{sign}{}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// ============================================================================
// TESTS
// ============================================================================
