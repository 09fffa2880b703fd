//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`]
//!
//! Every validator in this crate has the same shape:
//! `(raw input, configuration) -> Result<normalized value, ValidationError>`.
//! How input is sourced, how errors are shown and whether to retry is left
//! to the caller.

pub mod error;
pub mod traits;

pub use error::{ErrorKind, ValidationError};
pub use traits::Validate;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TEXT HELPERS
// ============================================================================

/// Removes every character that is not alphanumeric.
///
/// Underscores are removed too; only letters and digits survive.
///
/// ```
/// assert_eq!(validizer::foundation::strip("(709) 555-1234"), "7095551234");
/// ```
#[must_use]
pub fn strip(input: &str) -> String {
    input.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// Trims the input and collapses every internal run of whitespace to a
/// single space.
#[must_use]
pub fn collapse_spaces(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
