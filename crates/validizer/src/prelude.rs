//! Prelude module for convenient imports.
//!
//! Provides a single `use validizer::prelude::*;` import that brings in the
//! [`Validate`] trait, the error types, every built-in validator, the
//! configuration and the registry.
//!
//! # Examples
//!
//! ```rust
//! use validizer::prelude::*;
//!
//! let card = BankCard::default();
//! assert_eq!(card.validate("4111111111111111").unwrap(), "4111-1111-1111-1111");
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{ErrorKind, Validate, ValidationError, ValidationResult};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// CONFIGURATION AND DISPATCH
// ============================================================================

pub use crate::config::{ConfigError, ValidatorConfig};
pub use crate::registry::{Registry, Rule, ValidatorKind, Value};
