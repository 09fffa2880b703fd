//! Core traits for the validation system
//!
//! This module defines the trait every validator implements.

use crate::foundation::ValidationResult;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator is a pure function from raw input to either a normalized
/// value or a [`ValidationError`](crate::foundation::ValidationError).
/// Validators hold only their configuration, so a single instance can be
/// shared across threads and called any number of times.
///
/// # Examples
///
/// ```
/// use validizer::foundation::{ErrorKind, Validate, ValidationError, ValidationResult};
///
/// struct Shout;
///
/// impl Validate for Shout {
///     type Input = str;
///     type Output = String;
///
///     fn validate(&self, input: &str) -> ValidationResult<String> {
///         if input.trim().is_empty() {
///             return Err(ValidationError::blank("shout_blank"));
///         }
///         Ok(input.to_uppercase())
///     }
/// }
///
/// assert_eq!(Shout.validate("hey").unwrap(), "HEY");
/// assert_eq!(Shout.validate(" ").unwrap_err().kind, ErrorKind::Blank);
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// The normalized value produced for valid input.
    type Output;

    /// Validates the input and returns its canonical form.
    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output>;

    /// Returns `true` if the input would validate.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;
    type Output = V::Output;

    fn validate(&self, input: &Self::Input) -> ValidationResult<Self::Output> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================
