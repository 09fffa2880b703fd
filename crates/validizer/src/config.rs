//! Validator configuration.
//!
//! Default templates, the allowed name characters, the accepted card issuers
//! and the currency symbol are plain values on [`ValidatorConfig`]. Nothing
//! is global: build a config (or take the default), then ask it for
//! configured validators.
//!
//! ```
//! use validizer::config::ValidatorConfig;
//! use validizer::foundation::Validate;
//!
//! let config = ValidatorConfig::from_json(r#"{ "postal_code_format": "99999" }"#).unwrap();
//! let zip = config.postal_code().unwrap();
//! assert_eq!(zip.validate("90210").unwrap(), "90210");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validators::{
    BankCard, LicencePlate, Name, Number, Phone, PostalCode, Template, TemplateError,
};

// ============================================================================
// DEFAULTS
// ============================================================================

/// Country code prefixed to phone numbers.
pub const DEFAULT_COUNTRY_CODE: &str = "1";

/// North American phone number template.
pub const DEFAULT_PHONE_FORMAT: &str = "(999) 999-9999";

/// Canadian postal code template.
pub const DEFAULT_POSTAL_CODE_FORMAT: &str = "X9X-9X9";

/// Newfoundland and Labrador licence plate template.
pub const DEFAULT_LICENCE_PLATE_FORMAT: &str = "XXX 999";

/// Characters accepted in names (compared upper-cased).
pub const DEFAULT_NAME_CHARACTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ-.' ";

/// Symbol used for currency output.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Card issuers keyed by the first digit of the card number.
#[must_use]
pub fn default_card_issuers() -> BTreeMap<u8, String> {
    BTreeMap::from([
        (3, "Amex".to_owned()),
        (4, "Visa".to_owned()),
        (5, "MasterCard".to_owned()),
    ])
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while loading or checking a [`ValidatorConfig`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration was not valid JSON for this schema.
    #[error("failed to parse validator configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A template field could not be parsed.
    #[error("invalid {field}: {source}")]
    Template {
        /// Name of the offending field.
        field: &'static str,
        /// Underlying template error.
        #[source]
        source: TemplateError,
    },

    /// The country code contained something other than digits.
    #[error("country code {0:?} must contain only digits and an optional leading '+'")]
    CountryCode(String),

    /// A card issuer key was not a single decimal digit.
    #[error("card issuer key {0} is not a single digit")]
    IssuerDigit(u8),

    /// No name characters were configured.
    #[error("name_characters must not be empty")]
    EmptyNameCharacters,
}

// ============================================================================
// CONFIG
// ============================================================================

/// Explicit configuration for the built-in validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Country code for phone numbers, e.g. `"1"` or `"+44"`.
    pub country_code: String,
    /// Phone number template.
    pub phone_format: String,
    /// Postal code template.
    pub postal_code_format: String,
    /// Licence plate template.
    pub licence_plate_format: String,
    /// Characters accepted in names.
    pub name_characters: String,
    /// Card issuers keyed by lead digit.
    pub card_issuers: BTreeMap<u8, String>,
    /// Currency symbol for formatted amounts.
    pub currency_symbol: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
            phone_format: DEFAULT_PHONE_FORMAT.to_owned(),
            postal_code_format: DEFAULT_POSTAL_CODE_FORMAT.to_owned(),
            licence_plate_format: DEFAULT_LICENCE_PLATE_FORMAT.to_owned(),
            name_characters: DEFAULT_NAME_CHARACTERS.to_owned(),
            card_issuers: default_card_issuers(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_owned(),
        }
    }
}

fn template(field: &'static str, pattern: &str) -> Result<Template, ConfigError> {
    Template::parse(pattern).map_err(|source| ConfigError::Template { field, source })
}

impl ValidatorConfig {
    /// Parses a JSON configuration and checks it. Missing fields take their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Checks every field, returning the first problem found.
    pub fn check(&self) -> Result<(), ConfigError> {
        template("phone_format", &self.phone_format)?;
        template("postal_code_format", &self.postal_code_format)?;
        template("licence_plate_format", &self.licence_plate_format)?;

        let digits = self
            .country_code
            .strip_prefix('+')
            .unwrap_or(&self.country_code);
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::CountryCode(self.country_code.clone()));
        }

        if let Some(&digit) = self.card_issuers.keys().find(|&&d| d > 9) {
            return Err(ConfigError::IssuerDigit(digit));
        }
        if self.card_issuers.is_empty() {
            tracing::warn!("no card issuers configured; every bank card will be rejected");
        }

        if self.name_characters.is_empty() {
            return Err(ConfigError::EmptyNameCharacters);
        }
        Ok(())
    }

    /// Phone number validator.
    pub fn phone(&self) -> Result<Phone, ConfigError> {
        Phone::new(&self.phone_format, &self.country_code).map_err(|source| {
            ConfigError::Template {
                field: "phone_format",
                source,
            }
        })
    }

    /// Postal code validator.
    pub fn postal_code(&self) -> Result<PostalCode, ConfigError> {
        PostalCode::new(&self.postal_code_format).map_err(|source| ConfigError::Template {
            field: "postal_code_format",
            source,
        })
    }

    /// Licence plate validator.
    pub fn licence_plate(&self) -> Result<LicencePlate, ConfigError> {
        LicencePlate::new(&self.licence_plate_format).map_err(|source| {
            ConfigError::Template {
                field: "licence_plate_format",
                source,
            }
        })
    }

    /// Name validator.
    #[must_use]
    pub fn name(&self) -> Name {
        Name::new(&self.name_characters)
    }

    /// Bank card validator.
    #[must_use]
    pub fn bank_card(&self) -> BankCard {
        BankCard::new(self.card_issuers.clone())
    }

    /// Unbounded number validator using the configured currency symbol.
    #[must_use]
    pub fn number(&self) -> Number {
        Number::new().currency_symbol(self.currency_symbol.clone())
    }
}

// ============================================================================
// TESTS
// ============================================================================
