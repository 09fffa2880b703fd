//! Selecting validators by kind or by name.
//!
//! [`ValidatorKind`] enumerates the built-in validators, [`Rule`] is one of
//! them configured and ready to run, and [`Registry`] holds a rule per kind so
//! callers can dispatch on a name read from a form definition or a command
//! line:
//!
//! ```
//! use validizer::prelude::*;
//!
//! let registry = Registry::new(ValidatorConfig::default()).unwrap();
//! let value = registry.validate_named("Postal Code", "a1b2c3").unwrap();
//! assert_eq!(value, Value::Text("A1B-2C3".into()));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ValidatorConfig};
use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationResult};
use crate::validators::{
    BankCard, Bounds, Date, DateValue, LicencePlate, Mcp, Name, Number, NumberOutput, NumberValue,
    OptionMatcher, OptionSet, Phone, PostalCode, Range,
};

// ============================================================================
// VALIDATOR KIND
// ============================================================================

/// The built-in validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    /// [`Phone`]
    PhoneNumber,
    /// [`PostalCode`]
    PostalCode,
    /// [`LicencePlate`]
    LicencePlate,
    /// [`Name`]
    Name,
    /// [`Number`]
    Number,
    /// [`Range`]
    Range,
    /// [`Mcp`]
    Mcp,
    /// [`BankCard`]
    BankCard,
    /// [`OptionMatcher`]
    Text,
    /// [`Date`]
    Date,
}

impl ValidatorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::PhoneNumber,
        Self::PostalCode,
        Self::LicencePlate,
        Self::Name,
        Self::Number,
        Self::Range,
        Self::Mcp,
        Self::BankCard,
        Self::Text,
        Self::Date,
    ];

    /// Canonical snake-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PhoneNumber => "phone_number",
            Self::PostalCode => "postal_code",
            Self::LicencePlate => "licence_plate",
            Self::Name => "name",
            Self::Number => "number",
            Self::Range => "range",
            Self::Mcp => "mcp",
            Self::BankCard => "bank_card",
            Self::Text => "text",
            Self::Date => "date",
        }
    }

    /// Label for display, e.g. `"Phone Number"`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PhoneNumber => "Phone Number",
            Self::PostalCode => "Postal Code",
            Self::LicencePlate => "Licence Plate",
            Self::Name => "Name",
            Self::Number => "Number",
            Self::Range => "Range",
            Self::Mcp => "MCP",
            Self::BankCard => "Bank Card",
            Self::Text => "Text",
            Self::Date => "Date",
        }
    }

    fn known_names() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidatorKind {
    type Err = ValidationError;

    /// Case-insensitive; spaces, dashes and underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match key.as_str() {
            "phone_number" | "phone" => Ok(Self::PhoneNumber),
            "postal_code" | "postcode" => Ok(Self::PostalCode),
            "licence_plate" | "license_plate" => Ok(Self::LicencePlate),
            "name" => Ok(Self::Name),
            "number" => Ok(Self::Number),
            "range" => Ok(Self::Range),
            "mcp" => Ok(Self::Mcp),
            "bank_card" => Ok(Self::BankCard),
            "text" | "string" | "options" => Ok(Self::Text),
            "date" => Ok(Self::Date),
            _ => {
                let known = Self::known_names();
                Err(ValidationError::new(
                    ErrorKind::UnknownCategory,
                    "unknown_validator",
                    format!("{s} is not a validator. Known validators: {known}."),
                )
                .with_param("known", known))
            }
        }
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// The normalized output of any [`Rule`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Formatted text: phone numbers, codes, names, options, currency.
    Text(String),
    /// An integer.
    Integer(i64),
    /// A float.
    Float(f64),
    /// An inclusive `lo-hi` range.
    Range(NumberValue, NumberValue),
    /// A calendar date.
    Date(NaiveDate),
}

impl Value {
    /// Returns the text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a float, if it is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Range(lo, hi) => write!(f, "{lo}-{hi}"),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NumberOutput> for Value {
    fn from(value: NumberOutput) -> Self {
        match value {
            NumberOutput::Integer(i) => Self::Integer(i),
            NumberOutput::Float(x) => Self::Float(x),
            NumberOutput::Currency(s) => Self::Text(s),
        }
    }
}

impl From<Bounds> for Value {
    fn from(value: Bounds) -> Self {
        Self::Range(value.lo(), value.hi())
    }
}

impl From<DateValue> for Value {
    fn from(value: DateValue) -> Self {
        match value {
            DateValue::Date(date) => Self::Date(date),
            DateValue::Iso(text) => Self::Text(text),
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// A configured validator of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    PhoneNumber(Phone),
    PostalCode(PostalCode),
    LicencePlate(LicencePlate),
    Name(Name),
    Number(Number),
    Range(Range),
    Mcp(Mcp),
    BankCard(BankCard),
    Text(OptionMatcher),
    Date(Date),
}

impl Rule {
    /// Builds the default rule for `kind` from `config`.
    ///
    /// [`ValidatorKind::Text`] gets an empty option set, which rejects all
    /// input as misconfigured; use [`Rule::options`] instead.
    pub fn from_kind(kind: ValidatorKind, config: &ValidatorConfig) -> Result<Self, ConfigError> {
        Ok(match kind {
            ValidatorKind::PhoneNumber => Self::PhoneNumber(config.phone()?),
            ValidatorKind::PostalCode => Self::PostalCode(config.postal_code()?),
            ValidatorKind::LicencePlate => Self::LicencePlate(config.licence_plate()?),
            ValidatorKind::Name => Self::Name(config.name()),
            ValidatorKind::Number => Self::Number(config.number()),
            ValidatorKind::Range => Self::Range(Range::new()),
            ValidatorKind::Mcp => Self::Mcp(Mcp),
            ValidatorKind::BankCard => Self::BankCard(config.bank_card()),
            ValidatorKind::Text => Self::Text(OptionMatcher::default()),
            ValidatorKind::Date => Self::Date(Date::new()),
        })
    }

    /// A text rule accepting one of `options`.
    #[must_use]
    pub fn options(options: OptionSet, autocomplete: bool) -> Self {
        Self::Text(OptionMatcher::new(options).autocomplete(autocomplete))
    }

    /// The kind of validator this rule runs.
    #[must_use]
    pub fn kind(&self) -> ValidatorKind {
        match self {
            Self::PhoneNumber(_) => ValidatorKind::PhoneNumber,
            Self::PostalCode(_) => ValidatorKind::PostalCode,
            Self::LicencePlate(_) => ValidatorKind::LicencePlate,
            Self::Name(_) => ValidatorKind::Name,
            Self::Number(_) => ValidatorKind::Number,
            Self::Range(_) => ValidatorKind::Range,
            Self::Mcp(_) => ValidatorKind::Mcp,
            Self::BankCard(_) => ValidatorKind::BankCard,
            Self::Text(_) => ValidatorKind::Text,
            Self::Date(_) => ValidatorKind::Date,
        }
    }
}

impl Validate for Rule {
    type Input = str;
    type Output = Value;

    fn validate(&self, input: &str) -> ValidationResult<Value> {
        let kind = self.kind();
        tracing::trace!(validator = kind.name(), "validating input");

        let result = match self {
            Self::PhoneNumber(v) => v.validate(input).map(Value::from),
            Self::PostalCode(v) => v.validate(input).map(Value::from),
            Self::LicencePlate(v) => v.validate(input).map(Value::from),
            Self::Name(v) => v.validate(input).map(Value::from),
            Self::Number(v) => v.validate(input).map(Value::from),
            Self::Range(v) => v.validate(input).map(Value::from),
            Self::Mcp(v) => v.validate(input).map(Value::from),
            Self::BankCard(v) => v.validate(input).map(Value::from),
            Self::Text(v) => v.validate(input).map(Value::from),
            Self::Date(v) => v.validate(input).map(Value::from),
        };

        if let Err(error) = &result {
            tracing::debug!(
                validator = kind.name(),
                kind = %error.kind,
                code = %error.code,
                "input rejected"
            );
        }
        result
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// One configured [`Rule`] per [`ValidatorKind`].
#[derive(Debug, Clone)]
pub struct Registry {
    rules: HashMap<ValidatorKind, Rule>,
}

impl Registry {
    /// Checks `config` and builds the default rule for every kind.
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        config.check()?;
        let rules = ValidatorKind::ALL
            .into_iter()
            .map(|kind| Rule::from_kind(kind, &config).map(|rule| (kind, rule)))
            .collect::<Result<HashMap<_, _>, ConfigError>>()?;
        Ok(Self { rules })
    }

    /// Replaces the rule for the rule's kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.insert(rule.kind(), rule);
        self
    }

    /// Returns the rule for `kind`.
    #[must_use]
    pub fn rule(&self, kind: ValidatorKind) -> Option<&Rule> {
        self.rules.get(&kind)
    }

    /// Validates `input` with the rule for `kind`.
    pub fn validate(&self, kind: ValidatorKind, input: &str) -> ValidationResult<Value> {
        self.rule(kind)
            .ok_or_else(|| {
                ValidationError::misconfigured(format!("No rule registered for {kind}."))
            })?
            .validate(input)
    }

    /// Validates `input` with the rule named `name`.
    pub fn validate_named(&self, name: &str, input: &str) -> ValidationResult<Value> {
        self.validate(name.parse()?, input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
