//! Positional template matching.
//!
//! A [`Template`] is written as a pattern string: `9` is a digit slot, `X` is
//! a letter slot and every other character is a literal. Input is stripped of
//! everything that is not alphanumeric, checked slot by slot, and re-emitted
//! with the template's literals in place:
//!
//! ```
//! use validizer::foundation::Validate;
//! use validizer::validators::TemplateMatcher;
//!
//! let matcher = TemplateMatcher::parse("X9X-9X9").unwrap();
//! assert_eq!(matcher.validate("a1b 2c3").unwrap(), "A1B-2C3");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationResult, strip};

// ============================================================================
// TEMPLATE
// ============================================================================

/// A single position in a [`Template`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Consumes one ASCII decimal digit.
    Digit,
    /// Consumes one alphabetic character.
    Letter,
    /// Emits a fixed character without consuming input.
    Literal(char),
}

impl Slot {
    fn from_char(c: char) -> Self {
        match c {
            '9' => Self::Digit,
            'X' => Self::Letter,
            other => Self::Literal(other),
        }
    }

    /// Returns `true` if this slot consumes an input character.
    #[must_use]
    pub const fn is_input(self) -> bool {
        !matches!(self, Self::Literal(_))
    }

    fn accepts(self, c: char) -> bool {
        match self {
            Self::Digit => c.is_ascii_digit(),
            Self::Letter => c.is_alphabetic(),
            Self::Literal(_) => false,
        }
    }
}

/// Errors raised while building a [`Template`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// The pattern string was empty.
    #[error("template must not be empty")]
    Empty,

    /// The pattern contained only literals.
    #[error("template {0:?} has no digit (9) or letter (X) slots")]
    NoSlots(String),
}

/// An ordered sequence of digit, letter and literal slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    pattern: String,
    slots: Vec<Slot>,
    input_len: usize,
}

impl Template {
    /// Parses a pattern such as `"(999) 999-9999"`.
    pub fn parse(pattern: &str) -> Result<Self, TemplateError> {
        if pattern.is_empty() {
            return Err(TemplateError::Empty);
        }
        let template = Self::from_pattern(pattern);
        if template.input_len == 0 {
            return Err(TemplateError::NoSlots(pattern.to_owned()));
        }
        Ok(template)
    }

    /// Builds a template from a pattern known to contain slots.
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        let slots: Vec<Slot> = pattern.chars().map(Slot::from_char).collect();
        let input_len = slots.iter().filter(|s| s.is_input()).count();
        Self {
            pattern: pattern.to_owned(),
            slots,
            input_len,
        }
    }

    /// Returns the slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of characters expected from stripped input.
    #[must_use]
    pub fn input_len(&self) -> usize {
        self.input_len
    }

    /// Number of characters in a formatted result.
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the template has no letter slots.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        !self.slots.contains(&Slot::Letter)
    }

    /// Returns the original pattern string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

// ============================================================================
// TEMPLATE MATCHER
// ============================================================================

/// Validates and reformats input against a [`Template`].
///
/// Every slot is checked even after a failure, so the error message shows the
/// whole input with the template's punctuation applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMatcher {
    template: Template,
}

impl TemplateMatcher {
    /// Creates a matcher for an already parsed template.
    #[must_use]
    pub fn new(template: Template) -> Self {
        Self { template }
    }

    /// Parses `pattern` and creates a matcher for it.
    pub fn parse(pattern: &str) -> Result<Self, TemplateError> {
        Template::parse(pattern).map(Self::new)
    }

    /// Returns the template this matcher applies.
    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Matches input that has already been stripped to alphanumerics.
    pub fn match_stripped(&self, stripped: &str) -> ValidationResult<String> {
        let expected = self.template.input_len();
        if stripped.chars().count() != expected {
            let unit = if self.template.is_numeric() {
                "digits"
            } else {
                "characters"
            };
            return Err(
                ValidationError::wrong_length("template_length", stripped, expected, unit)
                    .with_param("template", self.template.to_string()),
            );
        }

        let mut chars = stripped.chars();
        let mut output = String::with_capacity(self.template.output_len());
        let mut normalized = String::with_capacity(self.template.output_len());
        let mut mismatched = false;

        for &slot in self.template.slots() {
            match slot {
                Slot::Literal(c) => {
                    output.push(c);
                    normalized.push(c);
                }
                _ => {
                    let Some(c) = chars.next() else { break };
                    if !slot.accepts(c) {
                        mismatched = true;
                    }
                    output.push(c);
                    normalized.push(if slot == Slot::Letter { upper(c) } else { c });
                }
            }
        }

        if mismatched {
            return Err(ValidationError::new(
                ErrorKind::BadCharacter,
                "template_mismatch",
                format!(
                    "{output} does not follow format: {}",
                    self.template.as_str()
                ),
            )
            .with_param("input", output)
            .with_param("template", self.template.to_string()));
        }

        Ok(normalized)
    }
}

/// Upper-cases `c` when its capital form is a single character.
fn upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl Validate for TemplateMatcher {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> ValidationResult<String> {
        tracing::trace!(template = %self.template, "matching input against template");
        self.match_stripped(&strip(input))
    }
}

// ============================================================================
// TESTS
// ============================================================================
