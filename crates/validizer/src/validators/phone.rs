//! Phone number validator.
//!
//! Phone numbers are matched against a digit template (North American
//! `(999) 999-9999` by default) after an optional country code is removed
//! from the front, and are returned in international form:
//! `+1 (709) 555-1234`.

use crate::config::{DEFAULT_COUNTRY_CODE, DEFAULT_PHONE_FORMAT};
use crate::foundation::{Validate, ValidationResult, strip};
use crate::validators::template::{Template, TemplateError, TemplateMatcher};

// ============================================================================
// PHONE NUMBER VALIDATOR
// ============================================================================

/// Validates phone numbers against a template.
///
/// # Examples
///
/// ```
/// use validizer::validators::Phone;
/// use validizer::foundation::Validate;
///
/// let phone = Phone::default();
/// assert_eq!(phone.validate("709 555 1234").unwrap(), "+1 (709) 555-1234");
/// assert_eq!(phone.validate("1-709-555-1234").unwrap(), "+1 (709) 555-1234");
/// assert!(phone.validate("555-1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    matcher: TemplateMatcher,
    country_code: String,
}

impl Phone {
    /// Creates a phone validator for `format` and `country_code`.
    ///
    /// Non-digit characters in the country code are ignored, so `"+1"` and
    /// `"1"` are equivalent. An empty country code disables both prefix
    /// removal and the `+CC ` output prefix.
    pub fn new(format: &str, country_code: &str) -> Result<Self, TemplateError> {
        Ok(Self {
            matcher: TemplateMatcher::parse(format)?,
            country_code: strip(country_code),
        })
    }

    /// Replaces the country code.
    #[must_use = "builder methods must be chained or built"]
    pub fn country_code(mut self, country_code: &str) -> Self {
        self.country_code = strip(country_code);
        self
    }

    /// Returns the template numbers are formatted with.
    #[must_use]
    pub fn template(&self) -> &Template {
        self.matcher.template()
    }

    fn without_country_code<'a>(&self, digits: &'a str) -> &'a str {
        if self.country_code.is_empty() {
            return digits;
        }
        match digits.strip_prefix(self.country_code.as_str()) {
            Some(rest) if rest.chars().count() == self.matcher.template().input_len() => rest,
            _ => digits,
        }
    }
}

impl Default for Phone {
    fn default() -> Self {
        Self {
            matcher: TemplateMatcher::new(Template::from_pattern(DEFAULT_PHONE_FORMAT)),
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
        }
    }
}

impl Validate for Phone {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> ValidationResult<String> {
        let digits = strip(input);
        let formatted = self
            .matcher
            .match_stripped(self.without_country_code(&digits))?;

        if self.country_code.is_empty() {
            Ok(formatted)
        } else {
            Ok(format!("+{} {formatted}", self.country_code))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
