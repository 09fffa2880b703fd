//! Postal code and licence plate validators.
//!
//! Both are plain template matches with upper-cased output; they differ only
//! in their default templates (Canadian `X9X-9X9` and Newfoundland
//! `XXX 999`).

use crate::config::{DEFAULT_LICENCE_PLATE_FORMAT, DEFAULT_POSTAL_CODE_FORMAT};
use crate::foundation::{Validate, ValidationResult};
use crate::validators::template::{Template, TemplateError, TemplateMatcher};

/// Validates postal codes.
///
/// ```
/// use validizer::validators::PostalCode;
/// use validizer::foundation::Validate;
///
/// assert_eq!(PostalCode::default().validate("a1b 2c3").unwrap(), "A1B-2C3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(TemplateMatcher);

impl PostalCode {
    /// Creates a postal code validator for `format`.
    pub fn new(format: &str) -> Result<Self, TemplateError> {
        TemplateMatcher::parse(format).map(Self)
    }

    /// Returns the template codes are formatted with.
    #[must_use]
    pub fn template(&self) -> &Template {
        self.0.template()
    }
}

impl Default for PostalCode {
    fn default() -> Self {
        Self(TemplateMatcher::new(Template::from_pattern(
            DEFAULT_POSTAL_CODE_FORMAT,
        )))
    }
}

impl Validate for PostalCode {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> ValidationResult<String> {
        self.0.validate(input)
    }
}

/// Validates licence plates.
///
/// ```
/// use validizer::validators::LicencePlate;
/// use validizer::foundation::Validate;
///
/// assert_eq!(LicencePlate::default().validate("vob-123").unwrap(), "VOB 123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicencePlate(TemplateMatcher);

impl LicencePlate {
    /// Creates a licence plate validator for `format`.
    pub fn new(format: &str) -> Result<Self, TemplateError> {
        TemplateMatcher::parse(format).map(Self)
    }

    /// Returns the template plates are formatted with.
    #[must_use]
    pub fn template(&self) -> &Template {
        self.0.template()
    }
}

impl Default for LicencePlate {
    fn default() -> Self {
        Self(TemplateMatcher::new(Template::from_pattern(
            DEFAULT_LICENCE_PLATE_FORMAT,
        )))
    }
}

impl Validate for LicencePlate {
    type Input = str;
    type Output = String;

    fn validate(&self, input: &str) -> ValidationResult<String> {
        self.0.validate(input)
    }
}
