//! Built-in validators
//!
//! # Categories
//!
//! - **Template**: phone number, postal code, licence plate (positional
//!   digit/letter templates); MCP number and bank card (fixed digit groups)
//! - **Options**: free text matched against an enumerated option set
//! - **Numeric**: number, `lo-hi` range
//! - **Calendar**: date
//! - **Text**: name
//!
//! # Examples
//!
//! ```rust
//! use validizer::prelude::*;
//!
//! let postal = PostalCode::default();
//! assert_eq!(postal.validate("a1b2c3").unwrap(), "A1B-2C3");
//!
//! let colour = OptionMatcher::new(OptionSet::parse("Red, Green, Blue")).autocomplete(true);
//! assert_eq!(colour.validate("gr").unwrap(), "Green");
//! ```

// Template validators
pub mod grouped;
pub mod phone;
pub mod postal;
pub mod template;

// Option validators
pub mod options;

// Numeric validators
pub mod number;
pub mod range;

// Calendar validators
pub mod date;

// Text validators
pub mod name;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use grouped::{BankCard, Mcp};
pub use phone::Phone;
pub use postal::{LicencePlate, PostalCode};
pub use template::{Slot, Template, TemplateError, TemplateMatcher};

pub use options::{OptionMatcher, OptionSet};

pub use number::{Number, NumberFormat, NumberOutput};
pub use range::{Bounds, NumberValue, Range};

pub use date::{Date, DateFormat, DateValue, days_in_month, is_leap_year};

pub use name::Name;
