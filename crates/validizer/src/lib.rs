//! # validizer
//!
//! Validation and normalization of free-form text input: phone numbers,
//! postal codes, licence plates, names, numbers, ranges, dates, card numbers
//! and picks from a list of options.
//!
//! ## Quick Start
//!
//! ```rust
//! use validizer::prelude::*;
//!
//! let postal = PostalCode::default();
//! assert_eq!(postal.validate("a1b 2c3").unwrap(), "A1B-2C3");
//!
//! let genre = OptionMatcher::new(OptionSet::parse("Rock,Pop,Jazz")).autocomplete(true);
//! assert_eq!(genre.validate("ro").unwrap(), "Rock");
//! ```
//!
//! ## Built-in Validators
//!
//! - **Templates**: [`TemplateMatcher`](validators::TemplateMatcher),
//!   [`Phone`](validators::Phone), [`PostalCode`](validators::PostalCode),
//!   [`LicencePlate`](validators::LicencePlate)
//! - **Digit groups**: [`Mcp`](validators::Mcp), [`BankCard`](validators::BankCard)
//! - **Numeric**: [`Number`](validators::Number), [`Range`](validators::Range)
//! - **Text**: [`Name`](validators::Name), [`OptionMatcher`](validators::OptionMatcher)
//! - **Calendar**: [`Date`](validators::Date)
//!
//! Every validator returns the normalized value or a
//! [`ValidationError`](foundation::ValidationError) carrying an
//! [`ErrorKind`](foundation::ErrorKind) and a human-readable message.
//! Defaults live on [`ValidatorConfig`](config::ValidatorConfig) and
//! [`Registry`](registry::Registry) dispatches by validator name.

// ValidationError is returned by value from every validator; boxing it would
// add an allocation to every rejected input.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod foundation;
pub mod prelude;
pub mod registry;
pub mod validators;
