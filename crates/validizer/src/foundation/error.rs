//! Error types for validation failures
//!
//! Every rejected input produces a [`ValidationError`]: a machine-readable
//! [`ErrorKind`] and `code`, plus a message that names the offending input
//! and, where one exists, the set of valid alternatives or the expected
//! template. A caller can show `message` to a user as-is.
//!
//! String fields use `Cow<'static, str>` so static codes never allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input was empty or whitespace only.
    Blank,
    /// Input had the wrong number of significant characters.
    WrongLength,
    /// A character was not allowed at its position.
    BadCharacter,
    /// A value fell outside its permitted bounds.
    OutOfRange,
    /// No option matched the input.
    NoMatch,
    /// More than one option matched an abbreviated input.
    AmbiguousMatch,
    /// The input belongs to a category that is not accepted (card issuer,
    /// validator name).
    UnknownCategory,
    /// A `lo-hi` range was malformed or inverted.
    MalformedRange,
    /// Input did not have the expected overall shape.
    InvalidFormat,
    /// The validator itself was set up incorrectly.
    Misconfigured,
}

impl ErrorKind {
    /// Returns the snake-case name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::WrongLength => "wrong_length",
            Self::BadCharacter => "bad_character",
            Self::OutOfRange => "out_of_range",
            Self::NoMatch => "no_match",
            Self::AmbiguousMatch => "ambiguous_match",
            Self::UnknownCategory => "unknown_category",
            Self::MalformedRange => "malformed_range",
            Self::InvalidFormat => "invalid_format",
            Self::Misconfigured => "misconfigured",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Ordered key/value parameters attached to a [`ValidationError`].
pub type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured, recoverable validation failure.
///
/// # Examples
///
/// ```
/// use validizer::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new(ErrorKind::WrongLength, "phone_length", "too short")
///     .with_param("expected", "10");
/// assert_eq!(error.kind, ErrorKind::WrongLength);
/// assert_eq!(error.param("expected"), Some("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Failure category.
    pub kind: ErrorKind,

    /// Stable error code for programmatic handling, e.g. `"phone_length"`.
    pub code: Cow<'static, str>,

    /// Human-readable message embedding the offending input.
    pub message: Cow<'static, str>,

    /// Ordered key/value parameters (typically `input`, `expected`,
    /// `options`).
    pub params: Params,

    /// Optional hint for fixing the input.
    pub help: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            params: SmallVec::new(),
            help: None,
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds help text or a suggestion.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "kind": self.kind,
            "code": self.code,
            "message": self.message,
            "params": params,
            "help": self.help,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(help) = &self.help {
            write!(f, "\n  Help: {help}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a `Blank` error.
    pub fn blank(code: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Blank, code, "Value cannot be blank.")
    }

    /// Creates a `WrongLength` error for input that should have had
    /// `expected` significant characters.
    pub fn wrong_length(
        code: impl Into<Cow<'static, str>>,
        input: &str,
        expected: usize,
        unit: &str,
    ) -> Self {
        Self::new(
            ErrorKind::WrongLength,
            code,
            format!("{input} is not {expected} {unit}."),
        )
        .with_param("input", input.to_owned())
        .with_param("expected", expected.to_string())
        .with_param("actual", input.chars().count().to_string())
    }

    /// Creates an `OutOfRange` error.
    pub fn out_of_range<T: fmt::Display>(
        code: impl Into<Cow<'static, str>>,
        actual: T,
        min: T,
        max: T,
    ) -> Self {
        Self::new(
            ErrorKind::OutOfRange,
            code,
            format!("{actual} is not in range ({min}-{max})."),
        )
        .with_param("min", min.to_string())
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a `Misconfigured` error for a validator that was set up
    /// incorrectly by the caller.
    pub fn misconfigured(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Misconfigured, "misconfigured", message)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new(ErrorKind::NoMatch, "test", "Test error");
        assert_eq!(error.kind, ErrorKind::NoMatch);
        assert_eq!(error.code, "test");
        assert_eq!(error.to_string(), "Test error");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::out_of_range("number_range", 12, 1, 10);
        assert_eq!(error.param("min"), Some("1"));
        assert_eq!(error.param("max"), Some("10"));
        assert_eq!(error.param("actual"), Some("12"));
        assert_eq!(error.param("missing"), None);
        assert_eq!(error.message, "12 is not in range (1-10).");
    }

    #[test]
    fn test_display_with_help() {
        let error = ValidationError::blank("name_blank").with_help("Enter at least one letter");
        assert_eq!(
            error.to_string(),
            "Value cannot be blank.\n  Help: Enter at least one letter"
        );
    }

    #[test]
    fn test_wrong_length_counts_chars() {
        let error = ValidationError::wrong_length("mcp_length", "12345", 12, "digits");
        assert_eq!(error.message, "12345 is not 12 digits.");
        assert_eq!(error.param("actual"), Some("5"));
    }

    #[test]
    fn test_json_value() {
        let error = ValidationError::misconfigured("options must not be empty");
        let json = error.to_json_value();
        assert_eq!(json["kind"], "misconfigured");
        assert_eq!(json["code"], "misconfigured");
        assert!(json["help"].is_null());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::blank("blank");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
